//! Hand-maintained identifier tables
//!
//! Everything here is static: structural keywords, non-standard spellings
//! seen in the wild (package managers, distro metadata), deprecated
//! identifiers that expand to a modern expression, and the identifiers that
//! are license exceptions rather than licenses.

/// Prefix the SPDX data set puts on deprecated identifiers
pub const DEPRECATED_PREFIX: &str = "deprecated_";

/// Non-standard spelling (lower-case) → canonical spelling
pub static ALIASES: &[(&str, &str)] = &[
    ("gpl3", "GPL-3.0"),
    ("gpl-3", "GPL-3.0"),
    ("gpl2", "GPL-2.0"),
    ("gpl-2", "GPL-2.0"),
    ("bsd2", "BSD-2-Clause"),
    ("bsd3", "BSD-3-Clause"),
    // nixpkgs
    ("asl20", "Apache-2.0"),
    ("asl11", "Apache-1.1"),
    ("mpl20", "MPL-2.0"),
    ("lgpl21", "LGPL-2.1"),
    ("lgpl3", "LGPL-3.0"),
];

/// Deprecated spelling (lower-case) → replacement tokens.
///
/// A replacement may carry a `with` keyword splitting it into a license and
/// an exception. Replacements are canonicalized again after expansion.
pub static DEPRECATED: &[(&str, &[&str])] = &[
    ("gpl-1.0+", &["gpl-1.0-or-later"]),
    ("gpl-2.0+", &["gpl-2.0-or-later"]),
    ("gpl-3.0+", &["gpl-3.0-or-later"]),
    ("lgpl-2.0+", &["lgpl-2.0-or-later"]),
    ("lgpl-2.1+", &["lgpl-2.1-or-later"]),
    ("lgpl-3.0+", &["lgpl-3.0-or-later"]),
    (
        "gpl-2.0-with-autoconf-exception",
        &["gpl-2.0-or-later", "with", "autoconf-exception-2.0"],
    ),
    (
        "gpl-2.0-with-bison-exception",
        &["gpl-2.0-or-later", "with", "bison-exception-2.2"],
    ),
    (
        "gpl-2.0-with-classpath-exception",
        &["gpl-2.0-or-later", "with", "classpath-exception-2.0"],
    ),
    (
        "gpl-2.0-with-font-exception",
        &["gpl-2.0-or-later", "with", "font-exception-2.0"],
    ),
    (
        "gpl-2.0-with-gcc-exception",
        &["gpl-2.0-or-later", "with", "gcc-exception-2.0"],
    ),
    (
        "gpl-3.0-with-autoconf-exception",
        &["gpl-3.0-or-later", "with", "autoconf-exception-3.0"],
    ),
    (
        "gpl-3.0-with-gcc-exception",
        &["gpl-3.0-or-later", "with", "gcc-exception-3.1"],
    ),
];

/// Identifiers that name a license exception (used after `WITH`)
pub static EXCEPTIONS: &[&str] = &[
    "GNU-compiler-exception",
    "GNOME-examples-exception",
    "Autoconf-exception-generic",
    "Autoconf-exception-generic-3.0",
    "Autoconf-exception-macro",
    "Autoconf-exception-2.0",
    "Autoconf-exception-3.0",
    "GCC-exception-2.0-note",
    "GCC-exception-2.0",
    "GCC-exception-3.1",
    "Bison-exception-2.2",
    "Bootloader-exception",
    "Classpath-exception-2.0",
    "CLISP-exception-2.0",
    "eCos-exception-2.0",
    "Fawkes-Runtime-exception",
    "FLTK-exception",
    "Font-exception-2.0",
    "freertos-exception-2.0",
    "gnu-javamail-exception",
    "GPL-3.0-389-ds-base-exception",
    "GPL-3.0-interface-exception",
    "GPL-3.0-linking-exception",
    "GPL-3.0-linking-source-exception",
    "i2p-gpl-java-exception",
    "LGPL-3.0-linking-exception",
    "Libtool-exception",
    "Linux-syscall-note",
    "LLVM-exception",
    "LZMA-exception",
    "mif-exception",
    "OCaml-LGPL-linking-exception",
    "OpenJDK-assembly-exception-1.0",
    "openvpn-openssl-exception",
    "Qt-GPL-exception-1.0",
    "Qt-LGPL-exception-1.1",
    "Swift-exception",
    "u-boot-exception-2.0",
    "Universal-FOSS-exception-1.0",
    "WxWindows-exception-3.1",
];
