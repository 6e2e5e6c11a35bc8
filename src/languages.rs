// src/languages.rs

/// One supported toolchain: the identifier and pinned version the backend
/// expects, a display name, the filename the backend compiles, and the
/// starter snippet shown when the language is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub file_name: &'static str,
    pub starter: &'static str,
}

/// The static catalog. Loaded once at compile time; never mutated.
pub const LANGUAGES: &[Language] = &[
    Language {
        id: "javascript",
        name: "JavaScript",
        version: "18.15.0",
        file_name: "main.js",
        starter: r#"console.log("Hello, World!");
console.log("Enter your name:");
// You can use input in the right pane"#,
    },
    Language {
        id: "python",
        name: "Python",
        version: "3.10.0",
        file_name: "main.py",
        starter: r#"print("Hello, World!")
name = input("Enter your name: ")
print(f"Hello, {name}!")"#,
    },
    Language {
        id: "java",
        name: "Java",
        version: "15.0.2",
        file_name: "Main.java",
        starter: r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#,
    },
    Language {
        id: "cpp",
        name: "C++",
        version: "10.2.0",
        file_name: "main.cpp",
        starter: r#"#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}"#,
    },
    Language {
        id: "c",
        name: "C",
        version: "10.2.0",
        file_name: "main.c",
        starter: r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}"#,
    },
    Language {
        id: "rust",
        name: "Rust",
        version: "1.68.2",
        file_name: "main.rs",
        starter: r#"fn main() {
    println!("Hello, World!");
}"#,
    },
    Language {
        id: "go",
        name: "Go",
        version: "1.16.2",
        file_name: "main.go",
        starter: r#"package main

import "fmt"

func main() {
    fmt.Println("Hello, World!")
}"#,
    },
    Language {
        id: "php",
        name: "PHP",
        version: "8.2.3",
        file_name: "main.php",
        starter: r#"<?php
echo "Hello, World!\n";
?>"#,
    },
];

/// Looks a language up by identifier.
pub fn find(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.id == id)
}

/// Filename for the single source file sent to the backend. Unrecognized
/// languages fall back to a generic extension.
pub fn file_name_for(id: &str) -> &'static str {
    find(id).map(|lang| lang.file_name).unwrap_or("main.txt")
}
