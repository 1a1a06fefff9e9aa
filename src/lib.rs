pub mod app;
pub mod backend;
pub mod browse;
pub mod cli;
pub mod completion;
pub mod config;
pub mod email;
pub mod mailbox;
pub mod manual;
pub mod output;
pub mod printer;
pub mod ui;
pub mod view;
