//! # Build Script for Static Content Tables / 静态内容表构建脚本
//!
//! This build script turns the literal datasets shipped with the crate into
//! type-safe Rust code. It processes three inputs:
//!
//! - `locales/*.toml` - one flat `key = "text"` file per supported language
//! - `data/verses.toml` - the ordered verse catalog with per-language text
//! - `data/commentary.toml` - commentary templates per perspective and language
//!
//! 此构建脚本将随 crate 提供的字面数据集转换为类型安全的 Rust 代码。
//! 它处理三个输入：每种语言一个的界面字符串文件、按顺序排列的经文目录，以及评注模板。
//!
//! ## Generated Code / 生成的代码
//!
//! - `ui_strings.rs`: the `UiKey` enum and one exhaustive lookup function per locale
//! - `verses.rs`: the builtin catalog as a static slice
//! - `commentary.rs`: the `(perspective, language)` template lookup
//!
//! Any locale that misses a key of the base locale (`en.toml`), and any verse
//! that misses text for a locale, aborts the build. Missing commentary cells
//! only emit a warning: they resolve to the fallback sentence at runtime.
//!
//! 任何缺少基础语言键的语言文件，以及任何缺少某种语言文本的经文，都会使构建失败。
//! 缺少的评注单元只会发出警告：它们在运行时解析为回退语句。

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the structure of a translation file.
/// Maps translation keys to their localized strings.
///
/// 表示翻译文件的结构。
/// 将翻译键映射到其本地化字符串。
#[derive(Debug, Deserialize)]
struct Translations(BTreeMap<String, String>);

/// The verse catalog file: an ordered array of `[[verse]]` tables.
/// 经文目录文件：按顺序排列的 `[[verse]]` 表数组。
#[derive(Debug, Deserialize)]
struct VerseFile {
    verse: Vec<VerseEntry>,
}

#[derive(Debug, Deserialize)]
struct VerseEntry {
    reference: String,
    text: BTreeMap<String, String>,
}

/// Perspective name -> language code -> template.
type CommentaryFile = BTreeMap<String, BTreeMap<String, String>>;

/// Converts a snake_case (or kebab-case) string to PascalCase.
/// Used to transform translation keys and language codes into enum variant names.
///
/// 将 snake_case（或 kebab-case）字符串转换为 PascalCase。
/// 用于将翻译键和语言代码转换为枚举变体名称。
///
/// # Examples / 示例
/// ```
/// assert_eq!(to_pascal_case("search_placeholder"), "SearchPlaceholder");
/// assert_eq!(to_pascal_case("pt-br"), "PtBr");
/// ```
fn to_pascal_case(s: &str) -> String {
    let mut pascal = String::with_capacity(s.len());
    let mut capitalize = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            // Separator indicates the next character should be capitalized
            // 分隔符表示下一个字符应该大写
            capitalize = true;
        } else if capitalize {
            pascal.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(c.to_ascii_lowercase());
        }
    }

    pascal
}

/// Converts a language code into the suffix used for generated function names
/// and the field names of `LocalizedText`.
fn to_ident(code: &str) -> String {
    code.replace('-', "_").to_lowercase()
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e))
}

/// Reads every locale file and checks that each one defines exactly the keys of `en.toml`.
/// Returns the locales keyed by language code.
///
/// 读取每个语言文件，并检查每个文件是否恰好定义了 `en.toml` 的键。
fn load_locales(locales_dir: &Path) -> std::io::Result<BTreeMap<String, Translations>> {
    let lang_files: Vec<PathBuf> = fs::read_dir(locales_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();

    let mut locales = BTreeMap::new();
    for path in &lang_files {
        let code = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_else(|| panic!("Invalid locale file name {:?}", path))
            .to_string();
        locales.insert(code, read_toml::<Translations>(path));
    }

    let base = locales
        .get("en")
        .expect("locales/en.toml is the base locale and must exist");
    let base_keys: BTreeSet<&String> = base.0.keys().collect();

    for (code, translations) in &locales {
        let keys: BTreeSet<&String> = translations.0.keys().collect();
        let missing: Vec<_> = base_keys.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&base_keys).collect();
        if !missing.is_empty() {
            panic!("Locale '{}' is missing keys: {:?}", code, missing);
        }
        if !extra.is_empty() {
            panic!("Locale '{}' defines keys unknown to en.toml: {:?}", code, extra);
        }
        if let Some((key, _)) = translations.0.iter().find(|(_, v)| v.trim().is_empty()) {
            panic!("Locale '{}' has an empty value for key '{}'", code, key);
        }
    }

    Ok(locales)
}

fn generate_ui_strings(locales: &BTreeMap<String, Translations>) -> String {
    let mut code = String::new();
    let base = &locales["en"];

    let pascal_case_keys: BTreeMap<_, _> = base
        .0
        .keys()
        .map(|key| (key.clone(), to_pascal_case(key)))
        .collect();

    writeln!(
        &mut code,
        "/// A key of the localized UI string table.\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]\n\
         pub enum UiKey {{"
    )
    .unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut code, "    {},", pascal_name).unwrap();
    }
    writeln!(&mut code, "}}\n").unwrap();

    writeln!(&mut code, "impl UiKey {{").unwrap();
    writeln!(
        &mut code,
        "    /// Every key, in key order.\n    pub const ALL: [UiKey; {}] = [",
        pascal_case_keys.len()
    )
    .unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut code, "        UiKey::{},", pascal_name).unwrap();
    }
    writeln!(&mut code, "    ];\n").unwrap();
    writeln!(
        &mut code,
        "    /// The key as written in the locale files.\n    pub fn as_str(self) -> &'static str {{\n        match self {{"
    )
    .unwrap();
    for (key, pascal_name) in &pascal_case_keys {
        writeln!(&mut code, "            UiKey::{} => {:?},", pascal_name, key).unwrap();
    }
    writeln!(&mut code, "        }}\n    }}\n}}\n").unwrap();

    for (lang_code, translations) in locales {
        writeln!(
            &mut code,
            "fn ui_string_{}(key: UiKey) -> &'static str {{\n    match key {{",
            to_ident(lang_code)
        )
        .unwrap();
        for (key, value) in &translations.0 {
            let pascal_key = &pascal_case_keys[key];
            writeln!(&mut code, "        UiKey::{} => {:?},", pascal_key, value).unwrap();
        }
        writeln!(&mut code, "    }}\n}}\n").unwrap();
    }

    code
}

fn generate_verses(path: &Path, codes: &BTreeSet<String>) -> String {
    let file: VerseFile = read_toml(path);
    if file.verse.is_empty() {
        panic!("{:?} must contain at least one verse", path);
    }

    let mut seen = BTreeSet::new();
    let mut code = String::new();
    writeln!(&mut code, "static BUILTIN_VERSES: &[VerseRecord] = &[").unwrap();

    for entry in &file.verse {
        if entry.reference.trim().is_empty() {
            panic!("A verse in {:?} has an empty reference", path);
        }
        if !seen.insert(entry.reference.clone()) {
            panic!("Duplicate verse reference '{}'", entry.reference);
        }
        for lang in codes {
            match entry.text.get(lang) {
                Some(text) if !text.trim().is_empty() => {}
                _ => panic!("Verse '{}' has no text for language '{}'", entry.reference, lang),
            }
        }
        if let Some(extra) = entry.text.keys().find(|k| !codes.contains(*k)) {
            panic!(
                "Verse '{}' has text for '{}', which has no locale file",
                entry.reference, extra
            );
        }

        writeln!(&mut code, "    VerseRecord {{").unwrap();
        writeln!(&mut code, "        reference: {:?},", entry.reference).unwrap();
        writeln!(&mut code, "        text: LocalizedText {{").unwrap();
        for (lang, text) in &entry.text {
            writeln!(&mut code, "            {}: {:?},", to_ident(lang), text).unwrap();
        }
        writeln!(&mut code, "        }},\n    }},").unwrap();
    }
    writeln!(&mut code, "];").unwrap();

    code
}

fn generate_commentary(path: &Path, codes: &BTreeSet<String>) -> String {
    let file: CommentaryFile = read_toml(path);
    let mut code = String::new();

    writeln!(
        &mut code,
        "#[allow(unreachable_patterns)]\n\
         fn template_for(perspective: Perspective, language: Language) -> Option<&'static str> {{\n    \
         match (perspective, language) {{"
    )
    .unwrap();

    for (perspective, templates) in &file {
        for lang in codes {
            if !templates.contains_key(lang) {
                println!(
                    "cargo:warning=No '{}' commentary template for language '{}'; the fallback sentence will be used",
                    perspective, lang
                );
            }
        }
        for (lang, template) in templates {
            if !codes.contains(lang) {
                panic!(
                    "Commentary '{}' has a template for '{}', which has no locale file",
                    perspective, lang
                );
            }
            if !template.contains("{reference}") {
                panic!(
                    "Commentary template '{}'/'{}' does not contain the {{reference}} placeholder",
                    perspective, lang
                );
            }
            writeln!(
                &mut code,
                "        (Perspective::{}, Language::{}) => Some({:?}),",
                to_pascal_case(perspective),
                to_pascal_case(lang),
                template
            )
            .unwrap();
        }
    }
    writeln!(&mut code, "        _ => None,\n    }}\n}}").unwrap();

    code
}

/// Main build script function that generates the static content tables.
///
/// 生成静态内容表的主构建脚本函数。
///
/// # Process / 处理过程
/// 1. Read and cross-check every locale file against `en.toml`
/// 2. Generate the `UiKey` enum and per-language lookup functions
/// 3. Generate the verse catalog, checking per-language completeness
/// 4. Generate the commentary template lookup
/// 5. Write the generated code to the output directory
///
/// 1. 读取每个语言文件并与 `en.toml` 交叉检查
/// 2. 生成 `UiKey` 枚举和每种语言的查找函数
/// 3. 生成经文目录，检查每种语言的完整性
/// 4. 生成评注模板查找
/// 5. 将生成的代码写入输出目录
fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let locales = load_locales(Path::new("locales"))?;
    let codes: BTreeSet<String> = locales.keys().cloned().collect();

    fs::write(out_dir.join("ui_strings.rs"), generate_ui_strings(&locales))?;
    fs::write(
        out_dir.join("verses.rs"),
        generate_verses(Path::new("data/verses.toml"), &codes),
    )?;
    fs::write(
        out_dir.join("commentary.rs"),
        generate_commentary(Path::new("data/commentary.toml"), &codes),
    )?;

    println!("cargo:rerun-if-changed=locales/");
    println!("cargo:rerun-if-changed=data/");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
