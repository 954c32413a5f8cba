//! End-to-end tests for VoxCue live under `tests/`.
