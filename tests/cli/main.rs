use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;
use zaplint::core::ast::{
    CallExpr, Callee, Expr, FileDump, Ident, Lit, LitKind, ObjKind, Pos, SelectorExpr, Span,
};

mod check;
mod fix;
mod init;

const BIN_NAME: &str = "zaplint";

const ZAP: &str = "go.uber.org/zap";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config file search at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project holding `<name>.go` and its syntax dump `<name>.ast.json`.
    pub fn with_go_file(name: &str, stmts: Vec<Node>) -> Result<Self> {
        let test = Self::new()?;
        test.write_go_file(name, stmts)?;
        Ok(test)
    }

    pub fn write_go_file(&self, name: &str, stmts: Vec<Node>) -> Result<()> {
        let go_file = format!("{}.go", name);
        let (source, dump) = render_go_file(&go_file, stmts);
        self.write_file(&go_file, &source)?;
        self.write_file(&format!("{}.ast.json", name), &serde_json::to_string(&dump)?)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn fix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fix");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and return its exit code, stdout and stderr.
pub fn run(cmd: &mut Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output()?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}

// ============================================================
// Go source + syntax dump fixtures
// ============================================================

/// Expression tree printed as Go source and as a syntax dump at once.
pub enum Node {
    /// Interpreted string literal; the value is quoted when printed.
    Str(&'static str),
    Int(&'static str),
    Var(&'static str),
    /// `zap.<name>(args...)`
    Zap(&'static str, Vec<Node>),
    /// `<recv>.<method>(args...)` on a `*zap.<type>` receiver.
    Method {
        recv: Box<Node>,
        type_name: &'static str,
        method: &'static str,
        args: Vec<Node>,
        /// Put each argument on its own line.
        split: bool,
    },
}

pub fn logger(method: &'static str, args: Vec<Node>) -> Node {
    Node::Method {
        recv: Box::new(Node::Var("logger")),
        type_name: "Logger",
        method,
        args,
        split: false,
    }
}

pub fn sugar(method: &'static str, args: Vec<Node>) -> Node {
    Node::Method {
        recv: Box::new(Node::Var("sugar")),
        type_name: "SugaredLogger",
        method,
        args,
        split: false,
    }
}

/// Same call with every argument on its own line.
pub fn split(node: Node) -> Node {
    match node {
        Node::Method {
            recv,
            type_name,
            method,
            args,
            ..
        } => Node::Method {
            recv,
            type_name,
            method,
            args,
            split: true,
        },
        other => other,
    }
}

/// Each statement goes on its own line inside `func main()`, starting at
/// line 4 with one tab of indentation.
fn render_go_file(file: &str, stmts: Vec<Node>) -> (String, FileDump) {
    let mut printer = Printer {
        source: String::from("package main\n\nfunc main() {\n"),
        line: 4,
        col: 1,
    };
    let mut exprs = Vec::new();
    for stmt in stmts {
        printer.write("\t");
        exprs.push(printer.print(stmt));
        printer.newline();
    }
    printer.source.push_str("}\n");
    (
        printer.source,
        FileDump {
            file: file.to_string(),
            exprs,
        },
    )
}

struct Printer {
    source: String,
    line: usize,
    col: usize,
}

impl Printer {
    fn pos(&self) -> Pos {
        Pos::new(self.line, self.col)
    }

    fn write(&mut self, text: &str) {
        self.source.push_str(text);
        self.col += text.len();
    }

    fn newline(&mut self) {
        self.source.push('\n');
        self.line += 1;
        self.col = 1;
    }

    fn ident(&mut self, name: &str, obj: ObjKind) -> Ident {
        let pos = self.pos();
        self.write(name);
        Ident {
            span: Span::new(pos, self.pos()),
            name: name.to_string(),
            obj: Some(obj),
        }
    }

    fn lit(&mut self, kind: LitKind, value: String) -> Expr {
        let pos = self.pos();
        self.write(&value);
        Expr::Lit(Lit {
            span: Span::new(pos, self.pos()),
            kind,
            value,
        })
    }

    fn call(
        &mut self,
        pos: Pos,
        x: Expr,
        name: &str,
        callee: Callee,
        args: Vec<Node>,
        split: bool,
    ) -> Expr {
        self.write(".");
        let sel = self.ident(name, ObjKind::Func);
        let fun = Expr::Selector(SelectorExpr {
            span: Span::new(pos, self.pos()),
            x: Box::new(x),
            sel,
        });
        self.write("(");
        let mut printed = Vec::new();
        for (i, arg) in args.into_iter().enumerate() {
            if split {
                if i > 0 {
                    self.write(",");
                }
                self.newline();
                self.write("\t\t");
            } else if i > 0 {
                self.write(", ");
            }
            printed.push(self.print(arg));
        }
        if split && !printed.is_empty() {
            self.write(",");
            self.newline();
            self.write("\t");
        }
        self.write(")");
        Expr::Call(CallExpr {
            span: Span::new(pos, self.pos()),
            fun: Box::new(fun),
            args: printed,
            callee: Some(callee),
        })
    }

    fn print(&mut self, node: Node) -> Expr {
        let pos = self.pos();
        match node {
            Node::Str(value) => self.lit(LitKind::String, format!("{:?}", value)),
            Node::Int(value) => self.lit(LitKind::Int, value.to_string()),
            Node::Var(name) => Expr::Ident(self.ident(name, ObjKind::Var)),
            Node::Zap(name, args) => {
                let pkg = Expr::Ident(self.ident("zap", ObjKind::Package));
                let callee = Callee {
                    full_name: format!("{ZAP}.{name}"),
                    pkg_path: Some(ZAP.to_string()),
                    name: name.to_string(),
                };
                self.call(pos, pkg, name, callee, args, false)
            }
            Node::Method {
                recv,
                type_name,
                method,
                args,
                split,
            } => {
                let recv = self.print(*recv);
                let callee = Callee {
                    full_name: format!("(*{ZAP}.{type_name}).{method}"),
                    pkg_path: Some(ZAP.to_string()),
                    name: method.to_string(),
                };
                self.call(pos, recv, method, callee, args, split)
            }
        }
    }
}
