//! # repochart-core
//!
//! Core types and traits for the repochart bot: [`Bot`] (chat transport capability), [`CommandHandler`],
//! message, command and response types, errors, and tracing initialization. Transport-agnostic; used by
//! command-router, chart-handlers and repochart-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, Photo};
pub use error::{CoreError, Result};
pub use logger::{init_tracing, mask_token};
pub use types::{
    Chat, Command, CommandHandler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
