mod args;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::{TempDir, tempdir};

pub const TEMPLATES: [(&str, &str); 5] = [
    ("require.js.j2", "var req=1;"),
    ("auth.js.j2", "var auth=1;"),
    ("post-events.js.j2", "{{ jsrequire }}{{ jsauth }}"),
    (
        "create-object.js.j2",
        "{% if jsauth %}\n{{ jsauth }}\n{% endif %}\nobject();\n",
    ),
    ("create-owner.js.j2", "{{ jsrequire }}\nowner();\n"),
];

pub fn base_dir(templates: &[(&str, &str)]) -> TempDir {
    let tmp_dir = tempdir().unwrap();

    templates.iter().for_each(|(name, content)| {
        let template_path = tmp_dir.path().join(name);
        let mut template_file = File::create(&template_path).unwrap();
        template_file.write_all(content.as_bytes()).unwrap();
    });

    tmp_dir
}

pub fn execute_jsrender(current_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let bin_path = Path::new(env!("CARGO_BIN_EXE_jsrender"));

    let mut cmd = Command::new(bin_path);
    cmd.current_dir(current_dir);
    cmd.env_remove("JSRENDER_LOG_LEVEL");
    cmd.args(args);

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    dbg!(&stdout);
    dbg!(&stderr);

    (stdout, stderr, output.status.success())
}
