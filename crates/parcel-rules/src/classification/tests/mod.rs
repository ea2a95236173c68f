mod advisory;
mod common;
mod ranking;
mod rules;
