use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pewinput::codes::KEY_LEFTSHIFT;
use pewinput::templates::DEFAULT_DEVICE_NAME;
use pewinput::{Capability, DeviceProfile, DeviceTemplates, ProfileBuilder, VirtualController};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod keymap;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name the virtual device registers with
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Milliseconds to wait after creating the device
    #[arg(long, global = true)]
    settle_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type text on a virtual US-layout keyboard
    Type {
        text: String,

        /// Pause between characters
        #[arg(long, default_value = "10")]
        delay_ms: u64,
    },
    /// Press and release a raw key code
    Key {
        code: u16,

        /// How long the key stays down
        #[arg(long, default_value = "0")]
        hold_ms: u64,
    },
    /// Move a virtual mouse pointer
    Move {
        #[arg(long, allow_hyphen_values = true)]
        dx: i32,
        #[arg(long, allow_hyphen_values = true)]
        dy: i32,

        /// Repeat the motion this many times
        #[arg(long, default_value = "1")]
        steps: u32,

        #[arg(long, default_value = "20")]
        interval_ms: u64,
    },
    /// Turn the wheel of a virtual mouse
    Scroll {
        #[arg(allow_hyphen_values = true)]
        amount: i32,

        #[arg(long)]
        horizontal: bool,
    },
    /// Create a device from a JSON profile and keep it alive
    Profile {
        file: PathBuf,

        #[arg(long, default_value = "10")]
        hold_secs: u64,
    },
    /// Print a built-in profile as JSON
    Template { kind: TemplateKind },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TemplateKind {
    Keyboard,
    Mouse,
    Gamepad,
}

impl TemplateKind {
    fn profile(self) -> DeviceProfile {
        match self {
            TemplateKind::Keyboard => DeviceTemplates::keyboard(),
            TemplateKind::Mouse => DeviceTemplates::mouse(),
            TemplateKind::Gamepad => DeviceTemplates::gamepad(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Type {
            ref text,
            delay_ms,
        } => {
            let mut keyboard = create(&args, TemplateKind::Keyboard.profile())?;
            let result = type_text(&mut keyboard, text, Duration::from_millis(delay_ms));
            finish(keyboard, result)
        }
        Command::Key { code, hold_ms } => {
            let key = Capability::key(code);
            let profile = ProfileBuilder::numbered(DEFAULT_DEVICE_NAME)
                .capability(key)
                .build();
            let mut keyboard = create(&args, profile)?;
            let result = (|| {
                keyboard.press(key)?;
                sleep(Duration::from_millis(hold_ms));
                keyboard.release(key)
            })();
            finish(keyboard, result.map_err(Into::into))
        }
        Command::Move {
            dx,
            dy,
            steps,
            interval_ms,
        } => {
            let mut mouse = create(&args, TemplateKind::Mouse.profile())?;
            let result = (0..steps).try_for_each(|step| {
                if step > 0 {
                    sleep(Duration::from_millis(interval_ms));
                }
                mouse.move_relative(dx, dy)
            });
            finish(mouse, result.map_err(Into::into))
        }
        Command::Scroll { amount, horizontal } => {
            let mut mouse = create(&args, TemplateKind::Mouse.profile())?;
            let result = if horizontal {
                mouse.move_hwheel(amount)
            } else {
                mouse.move_wheel(amount)
            };
            finish(mouse, result.map_err(Into::into))
        }
        Command::Profile {
            ref file,
            hold_secs,
        } => {
            let profile = DeviceProfile::from_json_file(file)
                .with_context(|| format!("Failed to load profile {}", file.display()))?;
            let device = create(&args, profile)?;

            match device.device().event_nodes() {
                Ok(nodes) => {
                    for node in nodes {
                        println!("Available as {}", node.display());
                    }
                }
                Err(e) => warn!("Could not look up event nodes: {}", e),
            }

            info!("Keeping device alive for {}s", hold_secs);
            sleep(Duration::from_secs(hold_secs));
            finish(device, Ok(()))
        }
        Command::Template { kind } => {
            println!("{}", kind.profile().to_json()?);
            Ok(())
        }
    }
}

/// Create the device for `profile`, applying command line overrides
fn create(args: &Args, mut profile: DeviceProfile) -> Result<VirtualController> {
    if let Some(name) = &args.name {
        profile.identity.name = name.clone();
    }
    if args.settle_ms.is_some() {
        profile.settle_ms = args.settle_ms;
    }

    let controller = profile
        .create_controller()
        .context("Failed to create virtual device (is /dev/uinput writable?)")?;
    info!("Device \"{}\" ready", profile.identity.name);
    Ok(controller)
}

/// Tear the device down, reporting the first error of the run
fn finish(controller: VirtualController, result: Result<()>) -> Result<()> {
    let teardown = controller.close();
    result?;
    teardown.context("Failed to tear down virtual device")
}

fn type_text(keyboard: &mut VirtualController, text: &str, delay: Duration) -> Result<()> {
    for c in text.chars() {
        let Some(stroke) = keymap::stroke_for(c) else {
            bail!("No key for character {:?}", c);
        };

        if stroke.shift {
            keyboard.click_combination(&[KEY_LEFTSHIFT, stroke.key])?;
        } else {
            keyboard.click(stroke.key)?;
        }

        if !delay.is_zero() {
            sleep(delay);
        }
    }
    Ok(())
}
