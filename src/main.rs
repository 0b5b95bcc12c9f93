mod app;
mod data;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the bucket-list CSV file.
    #[arg(long, default_value = "BucketList.csv")]
    data: String,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "bucket-graph",
        options,
        Box::new(move |cc| Ok(Box::new(app::BucketGraphApp::new(cc, args.data.clone())))),
    )
}
