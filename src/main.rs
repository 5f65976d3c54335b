// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use mutalign::errors::MutalignError;

fn main() -> Result<(), MutalignError> {
    mutalign::run()
}
