use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let csv_src = Path::new("../fixtures/spacex_launch_dash.csv");
    let csv_dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    // Copy the launch records into OUT_DIR for include_str. A missing file
    // still builds: the app then fails at startup with a LoadError.
    if csv_src.exists() {
        fs::copy(csv_src, &csv_dest).unwrap();
        if let Err(e) = spacex_launch::LaunchDataset::from_path(csv_src) {
            println!("cargo:warning=launch dataset will not load: {}", e);
        }
    } else {
        println!(
            "cargo:warning={} not found; the dashboard will report a load error",
            csv_src.display()
        );
        fs::write(&csv_dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
