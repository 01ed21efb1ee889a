mod url;
pub use self::url::*;
