use ledgrid::cli;
use ledgrid::control;
use ledgrid::driver;
use ledgrid::error::Error;
use ledgrid::event;
use ledgrid::input;
use smart_leds_trait::SmartLedsWrite;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    setup_panic();
    color_eyre::install().map_err(Error::InstallingColorEyre)?;
    let cli = <cli::Cli as clap::Parser>::parse();
    ledgrid::logging::setup(cli.verbosity);
    let cfg = ledgrid::config::Config::load(&cli.config).await?;

    match cli.command {
        cli::Command::Run => {
            run(cli, cfg).await?;
        }
        cli::Command::VerifyConfig => {
            tracing::info!("Configuration verified");
        }
    }

    Ok(())
}

fn setup_panic() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
}

async fn run(cli: cli::Cli, config: ledgrid::config::Config) -> Result<(), Error> {
    let mut writer = ledgrid::writer::Writer::new().map_err(Error::Preview)?;

    let app = ledgrid::apps::build(cli.app.unwrap_or(config.app.name));
    tracing::info!(app = app.name(), "Starting app");

    let ctx = driver::Context::new(Box::new(|change: control::Change<'_>| match change {
        control::Change::Status(status) => tracing::info!(status, "Status changed"),
        control::Change::Controls(controls) => tracing::info!(controls, "Controls changed"),
    }));
    let mut frame_driver = driver::FrameDriver::new(app, ctx)?;

    let (event_sender, mut event_receiver) = tokio::sync::mpsc::channel::<event::Event>(100);
    let cancellation_token = tokio_util::sync::CancellationToken::new();
    tokio::task::spawn({
        let cancellation_token = cancellation_token.clone();
        input::run(cancellation_token, event_sender)
    });

    let mut frame_interval = tokio::time::interval(config.display.frame_interval);

    loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                frame_driver.tick(std::time::Instant::now())?;
                writer
                    .write(frame_driver.context().matrix.pixels().iter().copied())
                    .map_err(Error::Preview)?;
            }

            event = event_receiver.recv() => {
                let Some(event) = event else { tracing::error!("Receiver closed"); break };
                frame_driver.handle_event(event)?;
            }

            _ctrl_c = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, shutting down");
                cancellation_token.cancel();
                break
            }
        }
    }

    Ok(())
}
