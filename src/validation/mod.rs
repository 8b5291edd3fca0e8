pub mod email;
pub mod name;
pub mod otp;
pub mod password;

pub use email::{mask_email, validate_email};
pub use name::validate_full_name;
pub use otp::format_otp;
pub use password::{validate_password, PasswordVerdict, Strength};
