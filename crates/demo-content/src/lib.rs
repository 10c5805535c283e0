//! Content of the XML-RPC walkthrough: the bundled project files, their
//! preview highlighting, and the scripted replays.

pub mod assets;
pub mod highlight;
pub mod script;

pub use assets::{save_all, AssetRegistry, AssetSink, DirectorySink, FileAsset, RecordingSink, SaveReport};
pub use highlight::{highlight_python, Token, TokenKind};
pub use script::{demo_timeline, file_creation_timeline, messages};
