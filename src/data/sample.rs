//! Bundled sample datasets for demos, docs and tests.

use super::Table;
use crate::error::Result;

/// The 14-row "play tennis" weather dataset (Quinlan, 1986).
///
/// Columns: `outlook`, `temperature`, `humidity`, `wind`, `play`.
pub const WEATHER_CSV: &str = "\
outlook,temperature,humidity,wind,play
sunny,hot,high,weak,no
sunny,hot,high,strong,no
overcast,hot,high,weak,yes
rain,mild,high,weak,yes
rain,cool,normal,weak,yes
rain,cool,normal,strong,no
overcast,cool,normal,strong,yes
sunny,mild,high,weak,no
sunny,cool,normal,weak,yes
rain,mild,normal,weak,yes
sunny,mild,normal,strong,yes
overcast,mild,high,strong,yes
overcast,hot,normal,weak,yes
rain,mild,high,strong,no
";

/// Loads [`WEATHER_CSV`] into a [`Table`].
///
/// # Errors
///
/// Never fails for the bundled text; the `Result` mirrors
/// [`Table::from_reader`].
///
/// # Examples
///
/// ```
/// let table = id3::data::weather().expect("bundled dataset parses");
/// assert_eq!(table.shape(), (14, 5));
/// ```
pub fn weather() -> Result<Table> {
    Table::from_reader(WEATHER_CSV.as_bytes())
}
