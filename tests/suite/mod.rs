mod config;
mod keyboard;
mod progression;
mod wizard_flow;
