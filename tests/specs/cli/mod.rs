// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the sdrrcd command line.

mod common;
mod launch;
mod help;
