use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

const ABOUT: &str = "Hourly temperature forecast TUI";

const LONG_ABOUT: &str = "
TUI dashboard for the Open-Meteo hourly temperature forecast.

The forecast is fetched once at startup for a fixed location and shown as a
current-conditions card, a temperature chart, and a paginated hourly table.
Use the left/right arrow keys to move between pages and q to quit.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {}
