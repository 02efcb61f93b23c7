//! # arbor-outline
//!
//! A parser for indentation-based project outlines.
//!
//! An outline is a plain-text description of an intended project layout:
//! folders, files, classes, methods and properties, nested by leading tabs.
//! This crate turns such an outline into a validated in-memory tree. Turning
//! that tree into real directories and files is the job of `arbor-scaffold`;
//! this crate never touches the filesystem.
//!
//! The pipeline is line based: each raw line is classified against a small
//! set of grammars, placed in the tree according to its tab depth, and
//! checked for legal containment at attach time. See the [outline] module
//! for the pieces.

pub mod outline;
