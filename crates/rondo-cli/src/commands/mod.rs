pub mod add;
pub mod clear;
pub mod list;
pub mod run;
