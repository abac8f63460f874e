mod config;
mod flow;
