// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Domain layer: navigation metadata shared between the shell and the MVU kernel.

pub mod example;
