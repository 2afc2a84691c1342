/// A named language and the file-extension suffixes that identify it.
pub struct Language {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// The fixed language table, shared by every repository in a run.
///
/// Declaration order is significant: the per-language section of the
/// report iterates this table in order.
pub const LANGUAGES: &[Language] = &[
    Language { name: "Python", extensions: &[".py"] },
    Language { name: "Golang", extensions: &[".go"] },
    Language { name: "Bash", extensions: &[".sh"] },
    Language { name: "C", extensions: &[".c"] },
    Language { name: "Rust", extensions: &[".rs"] },
    Language { name: "C++", extensions: &[".cc"] },
    Language { name: "Assembly", extensions: &[".s", ".asm"] },
];
