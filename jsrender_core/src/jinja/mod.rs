pub mod error_utils;

use crate::error::Result;

use std::path::Path;

use minijinja::{Environment, UndefinedBehavior, Value, path_loader};

/// Create a template environment loading templates from `base_dir`.
pub fn init_env(base_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_loader(path_loader(base_dir.to_path_buf()));
    env
}

/// Load template `name` from `env` and render it with `vars`.
pub fn render_template(env: &Environment<'static>, name: &str, vars: &Value) -> Result<String> {
    trace!("rendering {name:?}");
    let tmpl = env.get_template(name)?;
    tmpl.render(vars)
        .map_err(|e| error_utils::handle_template_error(e, &tmpl, vars))
}
