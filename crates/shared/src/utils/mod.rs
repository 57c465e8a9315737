mod gracefull;
mod logs;
mod page_tokens;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::page_tokens::{
    DEFAULT_MAX_PAGES_TO_SHOW, DEFAULT_WINDOW_SIZE, build_page_tokens, clamp_page,
};
