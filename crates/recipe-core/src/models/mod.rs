// ABOUTME: Domain model module for recipe records
// ABOUTME: Re-exports the recipe entity and its create/patch request shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe entity, difficulty levels, and validated request shapes
pub mod recipe;

pub use recipe::{Difficulty, Recipe, RecipeDraft, RecipePatch};
