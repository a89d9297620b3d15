// src/core/menu_render.rs

use crate::constants::{
    ENV_MENU_DESCRIPTION_INDENT, ENV_MENU_DESCRIPTION_SYMBOL, ENV_MENU_STYLE,
    ENV_SHOW_CATEGORY_DESCRIPTIONS, ENV_SHOW_MENU_DEBUG, ENV_SHOW_MENU_DESCRIPTIONS,
    ENV_SHOW_OPTION_DESCRIPTIONS,
};
use crate::core::env_source::{EnvSource, parse_render_switch};
use crate::core::menu::CommandMenu;
use crate::models::{MenuCategory, MenuOption};
use std::fmt;
use std::str::FromStr;

/// Longest option description still shown in the compact style, in characters.
const COMPACT_DESCRIPTION_LIMIT: usize = 30;
const FRAME_WIDTH: usize = 60;

/// Visual layout of the rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuStyle {
    /// One line per option; only short descriptions, inline.
    Compact,
    /// Upper-case headers and spaced-out options.
    Detailed,
    #[default]
    Standard,
}

impl FromStr for MenuStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "detailed" => Ok(Self::Detailed),
            "standard" => Ok(Self::Standard),
            other => Err(format!("unknown menu style '{}'", other)),
        }
    }
}

impl fmt::Display for MenuStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compact => "compact",
            Self::Detailed => "detailed",
            Self::Standard => "standard",
        };
        f.write_str(name)
    }
}

/// Options that control how the menu is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Master switch; when off, no description is shown at all.
    pub show_descriptions: bool,
    pub style: MenuStyle,
    pub show_category_descriptions: bool,
    pub show_option_descriptions: bool,
    pub description_marker: String,
    /// Spaces before an option description line.
    pub description_indent: usize,
    /// Appends category/option counts after the exit line.
    pub show_diagnostics: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            style: MenuStyle::Standard,
            show_category_descriptions: true,
            show_option_descriptions: true,
            description_marker: "⨠".to_string(),
            description_indent: 6,
            show_diagnostics: false,
        }
    }
}

impl RenderOptions {
    /// Reads render options from `env`. Unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env(env: &impl EnvSource) -> Self {
        let defaults = Self::default();
        let switch = |key: &str, default: bool| {
            env.var(key)
                .map(|value| parse_render_switch(&value))
                .unwrap_or(default)
        };

        let style = match env.var(ENV_MENU_STYLE) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::debug!("{}; using standard style", e);
                MenuStyle::Standard
            }),
            None => defaults.style,
        };

        Self {
            show_descriptions: switch(ENV_SHOW_MENU_DESCRIPTIONS, defaults.show_descriptions),
            style,
            show_category_descriptions: switch(
                ENV_SHOW_CATEGORY_DESCRIPTIONS,
                defaults.show_category_descriptions,
            ),
            show_option_descriptions: switch(
                ENV_SHOW_OPTION_DESCRIPTIONS,
                defaults.show_option_descriptions,
            ),
            description_marker: env
                .var(ENV_MENU_DESCRIPTION_SYMBOL)
                .unwrap_or(defaults.description_marker),
            description_indent: env
                .var(ENV_MENU_DESCRIPTION_INDENT)
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.description_indent),
            show_diagnostics: switch(ENV_SHOW_MENU_DEBUG, defaults.show_diagnostics),
        }
    }

    fn category_descriptions_enabled(&self) -> bool {
        self.show_descriptions && self.show_category_descriptions
    }

    fn option_descriptions_enabled(&self) -> bool {
        self.show_descriptions && self.show_option_descriptions
    }
}

impl CommandMenu {
    /// Renders the menu as display lines. Pure: only reads the current state.
    ///
    /// Categories without visible options are skipped. The exit line is always
    /// present, after every category.
    pub fn render(&self, options: &RenderOptions) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "=".repeat(FRAME_WIDTH),
            format!("🎮 {}", t!("menu.title")),
            "=".repeat(FRAME_WIDTH),
        ];

        let mut current_category = None;
        let mut displayed_categories = 0usize;

        for (number, entry) in self.numbered_entries() {
            let Some(category) = self.categories().get(entry.category_index) else {
                continue;
            };
            let Some(option) = category.options.get(entry.option_index) else {
                continue;
            };

            if current_category != Some(entry.category_index) {
                current_category = Some(entry.category_index);
                displayed_categories += 1;
                push_category_header(&mut lines, category, options);
            }
            push_option(&mut lines, number, option, options);
        }

        lines.push(String::new());
        lines.push(format!(" 0. 👋 {}", t!("menu.exit")));
        lines.push("=".repeat(FRAME_WIDTH));

        if options.show_diagnostics {
            lines.push(format!(
                t!("menu.diagnostics.counts"),
                categories = displayed_categories,
                options = self.max_option_number()
            ));
            lines.push(format!(
                t!("menu.diagnostics.style"),
                style = options.style,
                descriptions = options.show_descriptions
            ));
        }

        lines
    }

    /// Renders with options read from `env` at call time.
    pub fn render_from_env(&self, env: &impl EnvSource) -> Vec<String> {
        self.render(&RenderOptions::from_env(env))
    }
}

fn push_category_header(lines: &mut Vec<String>, category: &MenuCategory, options: &RenderOptions) {
    let show_description =
        options.category_descriptions_enabled() && !category.description.is_empty();

    lines.push(String::new());
    match options.style {
        MenuStyle::Compact => {
            lines.push(format!("{} {}", category.icon, category.name));
            if show_description {
                lines.push(format!(
                    "   {} {}",
                    options.description_marker, category.description
                ));
            }
            lines.push("-".repeat(30));
        }
        MenuStyle::Detailed => {
            lines.push(format!("{} {}", category.icon, category.name.to_uppercase()));
            if show_description {
                lines.push(format!(
                    "   {} {}",
                    options.description_marker, category.description
                ));
            }
            lines.push("─".repeat(50));
        }
        MenuStyle::Standard => {
            lines.push(format!("{} {}", category.icon, category.name));
            if show_description {
                lines.push(format!("   {}", category.description));
            }
            lines.push("-".repeat(40));
        }
    }
}

fn push_option(
    lines: &mut Vec<String>,
    number: usize,
    option: &MenuOption,
    options: &RenderOptions,
) {
    let has_description =
        options.option_descriptions_enabled() && !option.description.is_empty();
    let description_line = || {
        format!(
            "{}{} {}",
            " ".repeat(options.description_indent),
            options.description_marker,
            option.description
        )
    };

    match options.style {
        MenuStyle::Compact => {
            let mut line = format!("{:2}. {} {}", number, option.icon, option.name);
            if has_description
                && option.description.chars().count() <= COMPACT_DESCRIPTION_LIMIT
            {
                line.push_str(&format!(
                    " {} {}",
                    options.description_marker, option.description
                ));
            }
            lines.push(line);
        }
        MenuStyle::Detailed => {
            lines.push(format!(" {:2}. {} {}", number, option.icon, option.name));
            if has_description {
                lines.push(description_line());
                lines.push(String::new());
            }
        }
        MenuStyle::Standard => {
            lines.push(format!("{:2}. {} {}", number, option.icon, option.name));
            if has_description {
                lines.push(description_line());
            }
        }
    }
}
