use crate::error::{Error, ErrorKind};

use std::error::Error as StdError;
use std::fmt;

use minijinja::{Error as MiniJinjaError, ErrorKind as MiniJinjaErrorKind, Template, Value};
use regex::Regex;

/// Global functions every environment provides, never reported as undefined.
const BUILTIN_GLOBALS: [&str; 4] = ["range", "dict", "debug", "namespace"];

/// Undefined variable error, keeping the original minijinja error as source.
#[derive(Debug)]
pub struct UndefinedVariableError {
    variable: Option<String>,
    template: String,
    line: Option<usize>,
    source: MiniJinjaError,
}

impl UndefinedVariableError {
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }
}

impl fmt::Display for UndefinedVariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variable {
            Some(name) => write!(f, "undefined variable '{name}'")?,
            None => write!(f, "undefined variable")?,
        }
        write!(f, " in template '{}'", self.template)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

impl StdError for UndefinedVariableError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// Check if a top level variable is undefined in the given context
pub fn is_variable_undefined(var_name: &str, vars: &Value) -> bool {
    match vars.get_attr(var_name) {
        Ok(value) => value.is_undefined(),
        Err(_) => true,
    }
}

/// Byte offset of the first standalone occurrence of `name` in `text`.
fn first_occurrence(text: &str, name: &str) -> Option<usize> {
    Regex::new(&format!(r"\b{}\b", regex::escape(name)))
        .ok()?
        .find(text)
        .map(|m| m.start())
}

fn earliest<'a>(text: &str, names: &'a [String]) -> Option<&'a String> {
    names
        .iter()
        .filter_map(|name| first_occurrence(text, name).map(|pos| (pos, name)))
        .min()
        .map(|(_, name)| name)
}

/// Find the variable that caused an undefined error.
///
/// Candidates are the variables the template reads without declaring them (loop
/// targets and `set` names are declared) and that `vars` does not define. The one
/// appearing first on the failing line wins, then the first in the whole source.
pub fn find_undefined_variable(
    tmpl: &Template<'_, '_>,
    vars: &Value,
    line: Option<usize>,
) -> Option<String> {
    let mut candidates: Vec<String> = tmpl
        .undeclared_variables(false)
        .into_iter()
        .filter(|name| !BUILTIN_GLOBALS.contains(&name.as_str()))
        .filter(|name| is_variable_undefined(name, vars))
        .collect();
    candidates.sort();

    let source = tmpl.source();
    line.and_then(|n| source.lines().nth(n.checked_sub(1)?))
        .and_then(|line_text| earliest(line_text, &candidates))
        .or_else(|| earliest(source, &candidates))
        .or_else(|| candidates.first())
        .cloned()
}

/// Map a minijinja render error of `tmpl` to a `jsrender` error.
pub fn handle_template_error(e: MiniJinjaError, tmpl: &Template<'_, '_>, vars: &Value) -> Error {
    match e.kind() {
        MiniJinjaErrorKind::UndefinedError => {
            let line = e.line();
            Error::new(
                ErrorKind::TemplateRenderError,
                UndefinedVariableError {
                    variable: find_undefined_variable(tmpl, vars, line),
                    template: tmpl.name().to_owned(),
                    line,
                    source: e,
                },
            )
        }
        _ => Error::from(e),
    }
}
