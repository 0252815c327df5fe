//! Workspace-level integration tests for primecalc live under `tests/`.
