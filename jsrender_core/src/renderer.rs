use crate::config::BuildPlan;
use crate::context::Context;
use crate::error::Result;
use crate::jinja::{init_env, render_template};
use crate::output::{ensure_dir, write_file};

use std::path::PathBuf;

use minijinja::{Environment, context};

/// Renders every output of a [`BuildPlan`] from the templates in its base directory.
///
/// [`BuildPlan`]: ../config/struct.BuildPlan.html
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    plan: BuildPlan,
}

impl Renderer {
    pub fn new(plan: BuildPlan) -> Self {
        Renderer {
            env: init_env(&plan.base_dir),
            plan,
        }
    }

    /// Render template `name` without variables.
    pub fn render_fragment(&self, name: &str) -> Result<String> {
        debug!("rendering fragment {name}");
        render_template(&self.env, name, &context! {})
    }

    /// Render both fragments into the variables shared by all outputs.
    pub fn build_context(&self) -> Result<Context> {
        Ok(Context::new(
            self.render_fragment(&self.plan.fragments.require)?,
            self.render_fragment(&self.plan.fragments.auth)?,
        ))
    }

    /// Render the template of output `filename` with `context`.
    pub fn render_output(&self, filename: &str, context: &Context) -> Result<String> {
        let template_name = self.plan.template_name(filename);
        debug!("rendering {filename} from {template_name}");
        render_template(&self.env, &template_name, &context.as_value())
    }

    /// Write `content` to output `filename`, returning the path written.
    pub fn write_output(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.plan.output_path(filename);
        info!(target: "render", "{}", path.display());
        write_file(&path, content)?;
        Ok(path)
    }

    /// Render and write every output in order. The first error aborts the run.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let context = self.build_context()?;
        trace!("context: {context:?}");

        if self.plan.create_output_dir && !self.plan.check_mode {
            ensure_dir(&self.plan.output_dir())?;
        }

        self.plan
            .outputs
            .iter()
            .map(|filename| {
                let content = self.render_output(filename, &context)?;
                if self.plan.check_mode {
                    let path = self.plan.output_path(filename);
                    info!(target: "check", "{}", path.display());
                    Ok(path)
                } else {
                    self.write_output(filename, &content)
                }
            })
            .collect()
    }
}
