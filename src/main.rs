//! Host-side helper: `cargo run` compiles the sketches to WASM with wasm-pack
//! and serves `static/` on a local HTTP server.

use std::process::{self, Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";
const PAGES: [&str; 2] = ["monolith.html", "clouds.html"];

fn broken_pkg(status: &str) -> String {
    format!(
        "wasm-pack exited with {status}; {} would load a broken static/pkg/cosmic_artworks.js",
        PAGES.join(" and ")
    )
}

fn stale_pkg(err: &str) -> String {
    format!(
        "cannot run wasm-pack ({err}); serving whatever static/pkg already holds, {} may be out of date",
        PAGES.join(" and ")
    )
}

fn main() {
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Compiling sketches into static/pkg …");
    let pack = Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status();

    match pack {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("{}", broken_pkg(&st.to_string()));
            process::exit(1);
        }
        Err(e) => eprintln!("{}", stale_pkg(&e.to_string())),
    }

    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(e) = server {
        eprintln!("cannot start python3 http.server on port {PORT}: {e}");
        process::exit(1);
    }

    for page in PAGES {
        println!("  http://127.0.0.1:{PORT}/{page}");
    }

    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
