//! Built-in content collections.
//!
//! The [`ContentStore`] owns the four fixed datasets the portal browses. It is
//! built once at startup and only ever handed out by shared reference.

use crate::models::{
    Difficulty, Feature, InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Immutable holder for every collection shown in the portal
#[derive(Debug, Clone)]
pub struct ContentStore {
    questions: Vec<PracticeQuestion>,
    requirements: Vec<JobRequirement>,
    roadmap: Vec<RoadmapStep>,
    experiences: Vec<InterviewExperience>,
}

impl ContentStore {
    /// Build the store from explicit collections (used by tests and benches)
    pub fn new(
        questions: Vec<PracticeQuestion>,
        requirements: Vec<JobRequirement>,
        roadmap: Vec<RoadmapStep>,
        experiences: Vec<InterviewExperience>,
    ) -> Self {
        Self { questions, requirements, roadmap, experiences }
    }

    /// The bundled sample content
    pub fn builtin() -> Self {
        let questions = vec![
            PracticeQuestion {
                id: 1,
                title: "Two Sum".into(),
                company: "Google".into(),
                difficulty: Difficulty::Easy,
                category: "Arrays".into(),
            },
            PracticeQuestion {
                id: 2,
                title: "Valid Parentheses".into(),
                company: "Amazon".into(),
                difficulty: Difficulty::Easy,
                category: "Stacks".into(),
            },
            PracticeQuestion {
                id: 3,
                title: "LRU Cache".into(),
                company: "Microsoft".into(),
                difficulty: Difficulty::Medium,
                category: "Design".into(),
            },
        ];

        let requirements = vec![
            JobRequirement {
                company: "Google".into(),
                role: "Software Engineer".into(),
                requirements: strings(&[
                    "Strong CS fundamentals",
                    "Experience with distributed systems",
                    "Problem-solving skills",
                ]),
                experience: "3+ years".into(),
            },
            JobRequirement {
                company: "Meta".into(),
                role: "Frontend Engineer".into(),
                requirements: strings(&[
                    "React expertise",
                    "Performance optimization",
                    "UI/UX understanding",
                ]),
                experience: "2+ years".into(),
            },
        ];

        let roadmap = vec![
            RoadmapStep {
                title: "Foundation".into(),
                description: "Build strong programming fundamentals".into(),
                timeframe: "3-6 months".into(),
                skills: strings(&["Data Structures", "Algorithms", "System Design Basics"]),
            },
            RoadmapStep {
                title: "Specialization".into(),
                description: "Focus on your chosen tech stack".into(),
                timeframe: "6-12 months".into(),
                skills: strings(&["Frontend/Backend", "Databases", "Cloud Services"]),
            },
        ];

        let experiences = vec![
            InterviewExperience {
                company: "Amazon".into(),
                role: "SDE II".into(),
                date: "2024".into(),
                rounds: strings(&["Online Assessment", "Technical", "System Design", "Behavioral"]),
                questions: strings(&["Design a rate limiter", "Implement LRU cache"]),
                tips: "Focus on leadership principles and system design".into(),
            },
            InterviewExperience {
                company: "Microsoft".into(),
                role: "Software Engineer".into(),
                date: "2024".into(),
                rounds: strings(&["Coding", "Design", "Behavioral"]),
                questions: strings(&["Binary tree traversal", "Design a parking lot"]),
                tips: "Practice problem-solving communication".into(),
            },
        ];

        Self::new(questions, requirements, roadmap, experiences)
    }

    pub fn questions(&self) -> &[PracticeQuestion] {
        &self.questions
    }

    pub fn requirements(&self) -> &[JobRequirement] {
        &self.requirements
    }

    pub fn roadmap(&self) -> &[RoadmapStep] {
        &self.roadmap
    }

    pub fn experiences(&self) -> &[InterviewExperience] {
        &self.experiences
    }

    /// Number of records in the collection behind `feature`
    pub fn len_of(&self, feature: Feature) -> usize {
        match feature {
            Feature::Dsa => self.questions.len(),
            Feature::Requirements => self.requirements.len(),
            Feature::Roadmap => self.roadmap.len(),
            Feature::Experience => self.experiences.len(),
        }
    }

    pub fn total_len(&self) -> usize {
        Feature::ALL.iter().map(|f| self.len_of(*f)).sum()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}
