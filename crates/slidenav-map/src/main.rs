mod app;
mod convert;
mod panels;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("SlideNav Map"),
        ..Default::default()
    };

    eframe::run_native(
        "SlideNavMap",
        options,
        Box::new(|_cc| Ok(Box::new(app::MapViewerApp::default()))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
