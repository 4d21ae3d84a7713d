// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Operator-defined rules that suppress findings for matching requests.

pub mod registry;
pub mod rule;

pub use registry::{ExclusionRuleRegistry, Listener, ListenerId};
pub use rule::{ExclusionRule, ExclusionRuleType};
