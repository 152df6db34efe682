//! Behavioural tests for the session, validation and guard modules

mod session;
