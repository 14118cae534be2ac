use std::path::{Path, PathBuf};

use xshell::Shell;

fn main() {
    let matches = clap::Command::new("execgraph-codegentool")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("planus")
                .long("planus")
                .global(true)
                .default_value("planus")
                .help("planus executable to run"),
        )
        .subcommand(
            clap::Command::new("generate-flatbuffers")
                .about("Regenerates the Rust bindings for proto_defs/graph_format/*.fbs"),
        )
        .subcommand(
            clap::Command::new("check-flatbuffers")
                .about("Fails if the checked-in bindings differ from freshly generated ones"),
        )
        .get_matches();

    let planus = matches
        .get_one::<String>("planus")
        .expect("planus has a default")
        .clone();

    match matches.subcommand() {
        Some(("generate-flatbuffers", _args)) => {
            let out_dir = defs_dir();
            std::fs::create_dir_all(&out_dir).expect("create_dir_all");
            generate_flatbuffers(&planus, &out_dir);
        }
        Some(("check-flatbuffers", _args)) => check_flatbuffers(&planus),
        _ => panic!("Unknown subcommand {:?}", matches.subcommand()),
    }
}

fn defs_dir() -> PathBuf {
    let src_dir = std::env::current_dir()
        .expect("current_dir")
        .join("rust")
        .join("execgraph-format")
        .join("src");
    assert!(
        src_dir.exists(),
        "generate_flatbuffers: {} does not exist (run from the workspace root)",
        src_dir.display()
    );
    src_dir.join("defs")
}

fn fbs_files(sh: &Shell) -> Vec<PathBuf> {
    let fbs_dir = std::env::current_dir()
        .expect("current_dir")
        .join("proto_defs")
        .join("graph_format");
    let mut files = sh
        .read_dir(&fbs_dir)
        .expect("read fbs dir")
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "fbs"))
        .collect::<Vec<_>>();
    files.sort();
    files
}

fn out_name(input_fbs: &Path) -> String {
    let name = input_fbs
        .file_name()
        .expect("fbs file name")
        .to_string_lossy();
    format!("{name}.rs")
}

fn generate_flatbuffers(planus: &str, out_dir: &Path) {
    let sh = Shell::new().expect("shell");
    for input_fbs in fbs_files(&sh) {
        let out_path = out_dir.join(out_name(&input_fbs));
        sh.cmd(planus)
            .arg("rust")
            .arg("-o")
            .arg(&out_path)
            .arg(&input_fbs)
            .run()
            .expect("generate from fbs");
    }
}

fn check_flatbuffers(planus: &str) {
    let sh = Shell::new().expect("shell");
    let tmp_dir = sh.create_temp_dir().expect("create_temp_dir");
    generate_flatbuffers(planus, tmp_dir.path());

    let defs_dir = defs_dir();
    let mut stale = Vec::new();
    for input_fbs in fbs_files(&sh) {
        let name = out_name(&input_fbs);
        let fresh = sh.read_file(tmp_dir.path().join(&name)).expect("read generated");
        let current = sh.read_file(defs_dir.join(&name)).unwrap_or_default();
        if fresh != current {
            stale.push(name);
        }
    }
    if !stale.is_empty() {
        eprintln!(
            "stale generated bindings: {}; run `cargo run -p execgraph-codegentool -- generate-flatbuffers`",
            stale.join(", ")
        );
        std::process::exit(1);
    }
    println!("generated bindings are up to date");
}
