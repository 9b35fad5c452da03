//! Terminal rendering of analysis results
//!
//! Lays out a normalized record as titled section cards with their bullet
//! lists, plus an algorithms table. Pure display logic: it renders what it
//! is given without further validation.

use crate::analysis::PaperAnalysis;
use crate::session::ChatRole;
use colored::Colorize;
use prettytable::{cell, row, Table};

/// Render the full analysis record as terminal cards
///
/// # Arguments
///
/// * `analysis` - The record to display
pub fn print_analysis(analysis: &PaperAnalysis) {
    println!();
    println!("{}", analysis.title.bold().cyan());
    println!("{}", format!("({})", analysis.file_name).dimmed());

    for (label, body, bullets) in analysis.sections() {
        println!();
        println!("{}", label.bold().yellow());
        println!("{}", body);
        for bullet in bullets {
            println!("  {} {}", "•".cyan(), bullet);
        }
    }

    println!();
    println!("{}", "Algorithms & Methods".bold().yellow());
    print_algorithms_table(&analysis.algorithms);
    println!();
}

/// Render the algorithms list as a numbered table
fn print_algorithms_table(algorithms: &[String]) {
    let mut table = Table::new();
    table.add_row(row!["#", "Algorithm / Method"]);
    for (idx, algorithm) in algorithms.iter().enumerate() {
        table.add_row(row![idx + 1, algorithm]);
    }
    table.printstd();
}

/// Print one chat turn with a role-colored prefix
///
/// Assistant content may carry inline HTML markup; it is displayed as-is.
pub fn print_chat_turn(role: ChatRole, content: &str) {
    match role {
        ChatRole::User => println!("{} {}", "you:".bold().green(), content),
        ChatRole::Assistant => println!("{} {}", "paperlens:".bold().cyan(), content),
    }
}

/// Print the suggested starter questions shown when a chat session opens
pub fn print_suggestions(questions: &[&str]) {
    println!("{}", "Ask me anything about the research paper!".dimmed());
    println!("{}", "Suggested questions:".dimmed());
    for question in questions {
        println!("  {} {}", "-".dimmed(), question.dimmed());
    }
    println!();
}
