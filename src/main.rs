#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use housefit::{Cli, HousingDataset, embedded_dataset, run_app};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load the embedded dataset; a parse failure is a build defect
    let dataset = embedded_dataset().expect("embedded housing table is malformed");
    log::info!("Loaded {} housing points", dataset.len());

    if args.table {
        print_table(&dataset);
        return Ok(());
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Housefit - Slide. Fit. Predict.",
        options,
        Box::new(move |cc| Ok(run_app(cc, dataset))),
    )
}

fn print_table(dataset: &HousingDataset) {
    println!("{:>5}  {:>10}  {:>18}", "index", "area (m²)", "price (mkr)");
    for point in dataset.points() {
        println!(
            "{:>5}  {:>10.0}  {:>18.2}",
            point.index, point.area, point.price
        );
    }
}
