//! Built-in ICT 101 syllabus used by `init`, `edit reset` and as the import base

use super::types::{CurriculumRecord, TermBlock, TermName, WeekRow};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for CurriculumRecord {
    fn default() -> Self {
        Self {
            institution_name: "BUCAS GRANDE FOUNDATION COLLEGE".to_string(),
            institution_address: "C. TARUC STREET, BRGY. TARUC, SOCORRO, SURIGAO DEL NORTE"
                .to_string(),

            course_code: "ICT 101".to_string(),
            course_title: "Introduction to Computer Technology".to_string(),
            course_credit: "3 Units".to_string(),
            contact_hours: "3 hours/week".to_string(),
            prerequisite: "None".to_string(),

            vision_text: VISION.to_string(),
            mission_bullets: strings(&MISSION_BULLETS),
            institution_objectives: strings(&INSTITUTION_OBJECTIVES),

            course_description: COURSE_DESCRIPTION.to_string(),
            learning_outcomes: strings(&LEARNING_OUTCOMES),

            terms: default_terms(),

            teaching_activities: strings(&TEACHING_ACTIVITIES),
            assessment_breakdown: strings(&ASSESSMENT_BREAKDOWN),

            references_year_filter: "2021+".to_string(),
            references_list: strings(&REFERENCES),

            date_revised: String::new(),
            effectivity: "A.Y: 2025-2026 1st Semester".to_string(),

            prepared_by_name: "JOHN MICHEAL M. ACERA".to_string(),
            prepared_by_title: "FACULTY".to_string(),
            reviewed_by_name: "RHEA JEAN G. BELSONDRA, MIT".to_string(),
            reviewed_by_title: "DEAN COLLEGE OF INFORMATION TECHNOLOGY".to_string(),
            noted_by_name: "MAYLONA B. PALEN".to_string(),
            noted_by_title: "VP FOR ACADEMICS".to_string(),
            approved_by_name: "Atty. Ralna Dela Peña".to_string(),
            approved_by_title: "BGFC School President".to_string(),
        }
    }
}

const VISION: &str = "A premier academic institution responsible for quality instruction and training for sustainable socio-economic, environmental, and cultural advancement of Bucas Grande and the global Philippines.";

const MISSION_BULLETS: [&str; 8] = [
    "Holistic Education;",
    "Competent faculty and staff;",
    "Meaningful learning experience;",
    "Modern school facilities;",
    "Culture of research;",
    "Community services;",
    "Administrative efficiency and;",
    "Financial sustainability.",
];

const INSTITUTION_OBJECTIVES: [&str; 13] = [
    "Increase enrollment by 50%;",
    "Have 60% full-time faculty members;",
    "Have at least 60% of the full-time and part-time faculty completed master's degree in line with specialization;",
    "Offer basic education, senior high school, agriculture, fisheries, environmental science, tourism and graduate programs;",
    "Achieve at least level I accreditation of any program;",
    "Conduct and publish at least five relevant researchers based on the BGFC research agenda;",
    "Involve 100% of the faculty in research and research related activities;",
    "Strengthen research capability building of BGFC;",
    "Identify and develop at least three community extension programs;",
    "Develop computerized integrated system for enrollment, accounting, library and school formation management;",
    "Provide at least 18,000 entry level salary for full-time faculty;",
    "Acquisition of relevant instructional facilities (financial viability, scholarship, faculty and staff development program, linkages and alliances)",
    "At least 50% passing rate in the board course program",
];

const COURSE_DESCRIPTION: &str = "This course introduces the fundamentals of computer technology, including computer components, software, networks, internet applications, productivity tools, and emerging digital trends. Students will explore how computers power modern work, creativity, and communication through hands-on activities using AI tools (ChatGPT, Leonardo AI), design platforms (Canva), and basic productivity applications. Emphasis is placed on problem-solving, digital ethics, and adapting to rapid technological changes.";

const LEARNING_OUTCOMES: [&str; 7] = [
    "Explain the fundamental concepts of computer hardware, software, and networks.",
    "Use productivity tools for creating documents, presentations, and data reports.",
    "Apply safe and ethical practices in using technology and the internet.",
    "Demonstrate basic skills in AI-assisted content creation.",
    "Use visual design platforms to present ideas effectively.",
    "Identify current and emerging technologies and their applications in society.",
    "Collaborate on a small project integrating learned tools and concepts.",
];

const TEACHING_ACTIVITIES: [&str; 5] = [
    "Lectures & Discussions – Concept explanations",
    "Hands-on Labs – AI tools, Canva, productivity apps",
    "Case Studies – Ethical and real-world tech use",
    "Collaborative Projects – Group creative outputs",
    "Presentations – Showcasing applied skills",
];

const ASSESSMENT_BREAKDOWN: [&str; 5] = [
    "Major Exams (Prelim, Midterm, Pre-Final, Final) – 40%",
    "Class Standing (attendance, participation, recitation) – 20%",
    "Quizzes – 20%",
    "Project – 15%",
    "Attendance – 5%",
];

const REFERENCES: [&str; 6] = [
    "Shelly, G., & Vermaat, M. (2021). Discovering Computers. Cengage.",
    "ChatGPT Documentation (OpenAI)",
    "Leonardo AI Documentation",
    "Canva Design School",
    "Online cybersecurity awareness resources",
    "Current articles & videos on emerging technologies",
];

/// (week, topics, outcomes, activities)
type RowSpec = (&'static str, &'static str, &'static str, &'static str);

const PRELIM_ROWS: [RowSpec; 6] = [
    (
        "Week 1",
        "Introduction to Computers & Technology",
        "Identify basic computer parts, functions, and types.",
        "Lecture + Physical/virtual demo of PC parts",
    ),
    (
        "Week 2",
        "Software & Operating Systems",
        "Distinguish system vs application software.",
        "Hands-on: Navigating OS features",
    ),
    (
        "Week 3",
        "The Internet & Networking Basics",
        "Explain how the internet works, identify network types.",
        "Diagram activity",
    ),
    (
        "Week 4",
        "Productivity Tools (Docs, Sheets, Slides)",
        "Create basic documents, spreadsheets, and presentations.",
        "Quiz + mini-doc creation",
    ),
    (
        "Week 5",
        "Digital Citizenship & Ethics",
        "Apply safe online practices.",
        "Case study discussion",
    ),
    ("Week 6", "Prelim Exam", "—", "Written + Practical"),
];

const MIDTERM_ROWS: [RowSpec; 5] = [
    (
        "Week 7",
        "Introduction to AI Tools (ChatGPT)",
        "Craft effective prompts for text generation.",
        "Hands-on: Prompt writing",
    ),
    (
        "Week 8",
        "AI for Creative Work (Leonardo AI)",
        "Generate AI images from text prompts.",
        "Class demo + image creation",
    ),
    (
        "Week 9",
        "Visual Design with Canva",
        "Create posters/presentations using templates.",
        "Design challenge",
    ),
    (
        "Week 10",
        "Integrating AI & Design",
        "Combine ChatGPT, Leonardo AI, Canva in a workflow.",
        "Class activity: mini-project",
    ),
    ("Week 11", "Midterm Exam", "—", "Project + Quiz"),
];

const PRE_FINAL_ROWS: [RowSpec; 4] = [
    (
        "Week 12",
        "Computer Security Basics",
        "Identify threats and protective measures.",
        "Simulation / scenario activity",
    ),
    (
        "Week 13",
        "Cloud Computing & Online Collaboration",
        "Use cloud storage & shared docs effectively.",
        "Group work in Google Drive",
    ),
    (
        "Week 14",
        "Current & Emerging Technologies",
        "Identify and explain examples like VR, IoT, blockchain.",
        "Group research & presentation",
    ),
    ("Week 15", "Pre-Final Exam", "—", "Written + Practical"),
];

const FINAL_ROWS: [RowSpec; 3] = [
    (
        "Week 16",
        "Final Project Development",
        "Plan & create a simple digital project.",
        "Group consultation",
    ),
    (
        "Week 17",
        "Final Project Presentation",
        "Showcase AI + design workflow.",
        "Class presentation",
    ),
    (
        "Week 18",
        "Final Exam & Reflection",
        "Reflect on skills learned.",
        "Written + reflection essay",
    ),
];

fn rows(specs: &[RowSpec]) -> Vec<WeekRow> {
    specs
        .iter()
        .map(|&(week, topics, outcomes, activities)| {
            WeekRow::new(week, topics, outcomes, activities)
        })
        .collect()
}

fn default_terms() -> Vec<TermBlock> {
    vec![
        TermBlock::new(TermName::Prelim, rows(&PRELIM_ROWS)),
        TermBlock::new(TermName::Midterm, rows(&MIDTERM_ROWS)),
        TermBlock::new(TermName::PreFinal, rows(&PRE_FINAL_ROWS)),
        TermBlock::new(TermName::Final, rows(&FINAL_ROWS)),
    ]
}
