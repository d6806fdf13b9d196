pub mod domain;
pub mod ports;
pub mod question_use_cases;
pub mod services;
