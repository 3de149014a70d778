//! Interactive 3D Lorenz attractor explorer and animator.
//!
//! Explorer mode shows the full trajectory at once; animation mode traces it
//! point by point against the wall clock. In either mode the attractor
//! parameters, the color cycle frequency and the viewing angle can be changed
//! on the fly.
//!
//! Key bindings:
//!   1      explorer mode
//!   2      animation mode (restarts the animation)
//!   q/a    increase/decrease the 's' parameter
//!   w/s    increase/decrease the 'b' parameter
//!   e/d    increase/decrease the 'r' parameter
//!   x/z    increase/decrease the color cycle frequency
//!   arrows change the viewing angle
//!   0      reset the viewing angle
//!   9      reset the attractor parameters
//!   8      reset the color cycle frequency
//!   Esc    exit

use clap::Parser;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};

mod graphics;
mod lorenz;
mod math;
mod state;
mod widget;

use state::{AppState, Mode};
use widget::AttractorWidget;

/// An interactive 3D Lorenz attractor explorer and animator
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 650.0)]
    width: f64,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 650.0)]
    height: f64,

    /// Start in animation mode instead of explorer mode
    #[arg(long)]
    animate: bool,
}

pub fn main() -> Result<(), PlatformError> {
    let args = Args::parse();

    let main_window = WindowDesc::new(AttractorWidget::new())
        .title(LocalizedString::new("Lorenz Attractor"))
        .window_size((args.width, args.height));

    let initial_mode = if args.animate {
        Mode::Animation
    } else {
        Mode::Explorer
    };

    AppLauncher::with_window(main_window).launch(AppState::new(initial_mode))?;

    Ok(())
}
