use omega_cen_cmd::pipeline::{self, PipelineConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = PipelineConfig::default();
    let summary = pipeline::run(&config)?;

    println!(
        "Plotted {} of {} stars to {}",
        summary.rendered,
        summary.filter.input_rows,
        summary.output.display()
    );
    Ok(())
}
