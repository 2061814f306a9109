//! Shell Session
//!
//! Executes parsed commands against a tolerance set and a register of named
//! vectors.

use hashbrown::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;

use super::command::Command;
use super::response::Response;
use crate::config::Config;
use crate::diagnostics::{DiagnosticSink, RecordingSink};
use crate::error::{Error, Result};
use crate::set::ToleranceSet;
use crate::vector::{self, DenseVector, Norm, Vector};

/// Interactive session state
pub struct Session {
    config: Config,
    set: ToleranceSet,
    saved: Option<ToleranceSet>,
    registers: HashMap<String, DenseVector>,
    sink: Arc<RecordingSink>,
}

impl Session {
    /// Create a session with validated defaults
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let sink = Arc::new(RecordingSink::with_capacity(config.history));
        let shared: Arc<dyn DiagnosticSink> = sink.clone();
        Ok(Self {
            config,
            set: ToleranceSet::with_sink(shared),
            saved: None,
            registers: HashMap::new(),
            sink,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set(&self) -> &ToleranceSet {
        &self.set
    }

    pub fn diagnostics(&self) -> &RecordingSink {
        &self.sink
    }

    /// Parse and execute one line; `None` for blank lines and `#` comments
    pub fn run_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(match Command::parse(line) {
            Ok(cmd) => self.execute(cmd),
            Err(e) => Response::Error(e.to_string()),
        })
    }

    /// Execute every line of `reader`, writing one response per command
    ///
    /// Returns the number of executed commands.
    pub fn run_script<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> io::Result<usize> {
        let mut executed = 0;
        for line in reader.lines() {
            if let Some(response) = self.run_line(&line?) {
                writeln!(out, "{}", response)?;
                executed += 1;
            }
        }
        Ok(executed)
    }

    /// Execute a command and return response
    pub fn execute(&mut self, cmd: Command) -> Response {
        debug!(?cmd, "executing");
        self.dispatch(cmd).unwrap_or_else(|e| Response::Error(format!("{}: {}", e.code(), e)))
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Response> {
        let (norm, tolerance) = (self.config.norm, self.config.tolerance);

        let response = match cmd {
            Command::Insert { values } => {
                let v = self.build(&values)?;
                let inserted = self.set.insert(&v, norm, tolerance)?;
                Response::Integer(i64::from(inserted))
            }

            Command::Get { index } => Response::Vector(self.set.get(index)?),

            Command::Find { values } => {
                let sample = self.build(&values)?;
                match self.set.find(&sample, norm, tolerance)? {
                    Some(found) => Response::Vector(found),
                    None => Response::Nil,
                }
            }

            Command::Erase { index } => {
                self.set.erase(index)?;
                Response::Ok
            }

            Command::Remove { values } => {
                let sample = self.build(&values)?;
                let removed = self.set.erase_matching(&sample, norm, tolerance)?;
                Response::Integer(removed as i64)
            }

            Command::Size => Response::Integer(self.set.len() as i64),
            Command::Dim => Response::Integer(self.set.dimension() as i64),
            Command::List => Response::Vectors(self.set.snapshot()?),

            Command::Clear => {
                self.set.clear();
                Response::Ok
            }

            Command::Save => {
                self.saved = Some(self.set.try_clone()?);
                Response::Ok
            }

            Command::Restore => match self.saved.take() {
                Some(saved) => {
                    self.set = saved;
                    Response::Ok
                }
                None => Response::Error("no saved set".to_string()),
            },

            Command::SetNorm(norm) => {
                self.config.norm = norm;
                Response::Ok
            }

            Command::SetTolerance(tolerance) => {
                let candidate = self.config.clone().with_tolerance(tolerance);
                candidate.validate()?;
                self.config = candidate;
                Response::Ok
            }

            Command::Let { name, values } => {
                let v = self.build(&values)?;
                self.registers.insert(name, v);
                Response::Ok
            }

            Command::Add { lhs, rhs } => {
                let (a, b) = (self.register(&lhs)?, self.register(&rhs)?);
                Response::Vector(vector::add(a, b, &*self.sink)?)
            }

            Command::Sub { lhs, rhs } => {
                let (a, b) = (self.register(&lhs)?, self.register(&rhs)?);
                Response::Vector(vector::sub(a, b, &*self.sink)?)
            }

            Command::Dot { lhs, rhs } => {
                let (a, b) = (self.register(&lhs)?, self.register(&rhs)?);
                Response::Scalar(vector::dot(a, b, &*self.sink)?)
            }

            Command::Scale { name, factor } => {
                let a = self.register(&name)?;
                Response::Vector(vector::scale(a, factor, &*self.sink)?)
            }

            Command::Norms { values } => {
                let v = self.build(&values)?;
                Response::Lines(
                    Norm::ALL
                        .iter()
                        .map(|n| format!("{} = {}", n, v.norm(*n)))
                        .collect(),
                )
            }

            Command::Log => Response::Lines(
                self.sink
                    .entries()
                    .into_iter()
                    .map(|d| format!("{} {} {}", d.at.format("%H:%M:%S%.3f"), d.code, d.message))
                    .collect(),
            ),

            Command::Config => Response::Lines(vec![format!(
                "norm={} tolerance={} history={}",
                self.config.norm, self.config.tolerance, self.config.history
            )]),
        };

        Ok(response)
    }

    fn build(&self, values: &[f64]) -> Result<DenseVector> {
        vector::create(values.len(), values, &*self.sink)
    }

    fn register(&self, name: &str) -> Result<&DenseVector> {
        self.registers
            .get(name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown vector '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultCode;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(Config::default().with_tolerance(0.1)).unwrap()
    }

    fn run(session: &mut Session, line: &str) -> Response {
        session.run_line(line).expect("command line")
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(Session::new(Config::default().with_tolerance(-1.0)).is_err());
    }

    #[test]
    fn test_insert_and_size() {
        let mut s = session();
        assert_eq!(run(&mut s, "INSERT 1 0"), Response::Integer(1));
        assert_eq!(run(&mut s, "INSERT 0 1"), Response::Integer(1));
        assert_eq!(run(&mut s, "INSERT 1 0.05"), Response::Integer(0));
        assert_eq!(run(&mut s, "SIZE"), Response::Integer(2));
        assert_eq!(run(&mut s, "DIM"), Response::Integer(2));
    }

    #[test]
    fn test_insert_rejects_nan() {
        let mut s = session();
        run(&mut s, "INSERT 5 0");
        match run(&mut s, "INSERT nan 0") {
            Response::Error(msg) => assert!(msg.starts_with("InvalidArgument")),
            other => panic!("unexpected response: {}", other),
        }
        assert!(run(&mut s, "FIND nan 0").is_error());
        assert_eq!(run(&mut s, "SIZE"), Response::Integer(1));
        assert_eq!(s.diagnostics().count(ResultCode::InvalidArgument), 2);
    }

    #[test]
    fn test_find_and_remove() {
        let mut s = session();
        run(&mut s, "INSERT 1 0");
        run(&mut s, "INSERT 0 1");

        assert_eq!(run(&mut s, "FIND 5 5"), Response::Nil);
        match run(&mut s, "FIND 0.99 0") {
            Response::Vector(v) => assert_eq!(v.as_slice(), &[1.0, 0.0]),
            other => panic!("unexpected response: {}", other),
        }

        assert_eq!(run(&mut s, "REMOVE 1 0"), Response::Integer(1));
        assert_eq!(run(&mut s, "LIST").to_string(), "0) [0, 1]");
    }

    #[test]
    fn test_errors_carry_code() {
        let mut s = session();
        run(&mut s, "INSERT 1 0");
        let text = run(&mut s, "INSERT 1 0 0").to_string();
        assert!(text.starts_with("(error) DimensionMismatch"));
        let text = run(&mut s, "GET 1").to_string();
        assert!(text.starts_with("(error) IndexOutOfRange"));
    }

    #[test]
    fn test_save_restore() {
        let mut s = session();
        run(&mut s, "INSERT 1 2");
        assert_eq!(run(&mut s, "SAVE"), Response::Ok);
        run(&mut s, "CLEAR");
        assert_eq!(run(&mut s, "SIZE"), Response::Integer(0));
        assert_eq!(run(&mut s, "RESTORE"), Response::Ok);
        assert_eq!(run(&mut s, "SIZE"), Response::Integer(1));
        assert!(run(&mut s, "RESTORE").is_error());
    }

    #[test]
    fn test_settings() {
        let mut s = session();
        assert_eq!(run(&mut s, "NORM l1"), Response::Ok);
        assert_eq!(run(&mut s, "TOL 0.5"), Response::Ok);
        assert!(run(&mut s, "TOL -2").is_error());
        assert_eq!(s.config().norm, Norm::L1);
        assert_eq!(s.config().tolerance, 0.5);
        assert_eq!(
            run(&mut s, "CONFIG").to_string(),
            "norm=l1 tolerance=0.5 history=64"
        );
    }

    #[test]
    fn test_named_vector_arithmetic() {
        let mut s = session();
        run(&mut s, "LET a 1 2 3");
        run(&mut s, "LET b 4 5 6");
        run(&mut s, "LET c 1 1");

        assert_eq!(run(&mut s, "ADD a b").to_string(), "[5, 7, 9]");
        assert_eq!(run(&mut s, "SUB b a").to_string(), "[3, 3, 3]");
        assert_eq!(run(&mut s, "DOT a b"), Response::Scalar(32.0));
        assert_eq!(run(&mut s, "SCALE a 2").to_string(), "[2, 4, 6]");
        assert!(run(&mut s, "ADD a zz").is_error());

        // factory failures reach the session sink
        assert!(run(&mut s, "DOT a c").is_error());
        assert_eq!(s.diagnostics().count(ResultCode::DimensionMismatch), 1);
        let log = run(&mut s, "LOG").to_string();
        assert!(log.contains("[dot]"));
    }

    #[test]
    fn test_norms() {
        let mut s = session();
        let text = run(&mut s, "NORMS 3 -4").to_string();
        assert_eq!(text, "l1 = 7\nl2 = 5\nlinf = 4");
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let mut s = session();
        assert!(s.run_line("").is_none());
        assert!(s.run_line("  # comment").is_none());
    }

    #[test]
    fn test_run_script() {
        let mut s = session();
        let script = "# seed\nINSERT 1 0\n\nINSERT 0 1\nINSERT 1 0.05\nSIZE\nbogus\n";
        let mut out = Vec::new();
        let executed = s.run_script(Cursor::new(script), &mut out).unwrap();

        assert_eq!(executed, 5);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "(integer) 2");
        assert!(lines[4].starts_with("(error) unknown command"));
    }
}
