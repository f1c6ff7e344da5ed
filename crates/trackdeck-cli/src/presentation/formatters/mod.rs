pub mod highlight;
pub mod status;
pub mod text;

use is_terminal::IsTerminal;
use once_cell::sync::Lazy;

/// Whether console output should carry ANSI colors. Piped output stays
/// plain so it can be grepped and tested.
pub static USE_COLOR: Lazy<bool> = Lazy::new(|| std::io::stdout().is_terminal());
