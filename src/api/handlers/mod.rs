pub mod health;
pub use self::health::health;

pub mod root;
pub use self::root::root;

pub mod register;
pub use self::register::register;

pub mod login;
pub use self::login::login;

pub mod dashboard;
pub use self::dashboard::dashboard;

pub mod types;
