//! Shared test utilities for integration tests
#![allow(dead_code)]

use career_portal::ContentStore;
use career_portal::models::{
    Difficulty, InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep,
};

/// Queries exercised against every collection by the property tests
pub const QUERIES: &[&str] = &[
    "", "a", "A", "e", "google", "GOOGLE", "amazon", "design", "Design", "engineer", "sde", "2024",
    "months", "stack", "foundation", "zzz", " ", "lru cache", "+",
];

pub fn question(id: u32, title: &str, company: &str, difficulty: Difficulty) -> PracticeQuestion {
    PracticeQuestion {
        id,
        title: title.to_string(),
        company: company.to_string(),
        difficulty,
        category: "Arrays".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Larger synthetic store for ordering and stability checks
pub fn synthetic_store(size: u32) -> ContentStore {
    let companies = ["Google", "Amazon", "Microsoft", "Meta", "Apple"];
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    let questions = (0..size)
        .map(|i| {
            question(
                i,
                &format!("Problem {}", i),
                companies[i as usize % companies.len()],
                difficulties[i as usize % difficulties.len()],
            )
        })
        .collect();

    let requirements = (0..size)
        .map(|i| JobRequirement {
            company: companies[i as usize % companies.len()].to_string(),
            role: format!("Engineer L{}", i % 7),
            requirements: strings(&["Rust", "Distributed systems"]),
            experience: format!("{}+ years", i % 10),
        })
        .collect();

    let roadmap = (0..size)
        .map(|i| RoadmapStep {
            title: format!("Step {}", i),
            description: if i % 2 == 0 { "Build depth".into() } else { "Broaden scope".into() },
            timeframe: "3 months".to_string(),
            skills: strings(&["Algorithms"]),
        })
        .collect();

    let experiences = (0..size)
        .map(|i| InterviewExperience {
            company: companies[i as usize % companies.len()].to_string(),
            role: "SDE".to_string(),
            date: format!("20{:02}", 10 + i % 15),
            rounds: strings(&["Coding"]),
            questions: strings(&["Two Sum"]),
            tips: "Practice".to_string(),
        })
        .collect();

    ContentStore::new(questions, requirements, roadmap, experiences)
}
