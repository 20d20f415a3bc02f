pub const DEFAULT_SUBJECT: &str = "Mata Pelajaran Umum";

pub const AUDIENCE_SMP: &str = "Target Audience: Siswa SMP (Fase D Kurikulum Merdeka). Use simpler language appropriate for 12-15 year olds.";

pub const AUDIENCE_SMK: &str = "Target Audience: Siswa SMK (Sekolah Menengah Kejuruan). Context: Vocational/Industrial.
For productive subjects (e.g., TKJ, RPL, Otomotif), focus on practical case studies, troubleshooting, and industrial standards.
For general subjects, relate them to the work environment where possible.";

pub const AUDIENCE_SMA: &str = "Target Audience: Siswa SMA (Fase E/F Kurikulum Merdeka). Focus on Academic and Scientific reasoning.";

pub const CURRICULUM_SCOPE_CLAUSE: &str =
    "CAKUPAN MATERI: Gunakan referensi kurikulum di bawah ini.";

/// Subjects whose generic vocational guidance needs a stronger format directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectCategory {
    Entrepreneurship,
    LocalContent,
}

pub struct SubjectOverride {
    pub category: SubjectCategory,
    /// Matched case-insensitively as substrings of the subject name.
    pub fragments: &'static [&'static str],
    pub directive: &'static str,
}

pub const SUBJECT_OVERRIDES: &[SubjectOverride] = &[
    SubjectOverride {
        category: SubjectCategory::Entrepreneurship,
        fragments: &["kewirausahaan", "produk kreatif", "pkk"],
        directive: "SUBJECT OVERRIDE (Produk Kreatif & Kewirausahaan):
- Write STANDARD WRITTEN-THEORY questions (konsep, analisis kasus usaha, perhitungan biaya/harga pokok, pemasaran). Do NOT produce practical checklists, observation sheets, or project instructions.
- Every multiple-choice item must still have exactly 5 options and one correct letter.
- Every essay item must have a full model answer and a Pedoman Penskoran.
- 'cp', 'atp', 'material' and 'indicator' must be filled for EVERY question. Never leave them blank or write '-'.",
    },
    SubjectOverride {
        category: SubjectCategory::LocalContent,
        fragments: &["muatan lokal", "mulok"],
        directive: "SUBJECT OVERRIDE (Muatan Lokal):
- Write STANDARD WRITTEN-THEORY questions about the regional culture, language, or skills named in the subject. Do NOT produce performance rubrics or practical task sheets.
- Every multiple-choice item must still have exactly 5 options and one correct letter.
- 'cp', 'atp', 'material' and 'indicator' must be filled for EVERY question. Never leave them blank or write '-'.",
    },
];

pub const KISI_KISI_DIRECTIVE: &str = "1. Kisi-kisi (Exam Grid): This is CRITICAL. For EVERY question, generate:
   - 'cp' (Capaian Pembelajaran): The broad competency standard.
   - 'atp' (Alur Tujuan Pembelajaran): The specific learning objective.
   - 'material' (Materi Esensial): The specific topic focus.
   - 'indicator' (Indikator Soal): Must be OPERATIONAL and specific. START with \"Disajikan...\".";

pub const ANSWER_KEY_DIRECTIVE: &str = "4. Answer Keys (CRITICAL):
   - Multiple Choice: Just the letter.
   - Essay (Uraian): You MUST provide the FULL COMPLETE MODEL ANSWER.
     - IMPORTANT: Do NOT just write \"Siswa menjawab dengan benar\".
     - REQUIRED FORMAT: Write a 2-3 sentence model answer. Then, add a scoring guide (Pedoman Penskoran).";

pub const FORMATTING_DIRECTIVE: &str = "5. Formatting Rules:
   - CLEAN TEXT ONLY: Do NOT use Markdown formatting (like **bold**, *italic*, or lists) inside the JSON values. The output will be put into raw text inputs, so symbols look messy. Use newlines (\\n) for formatting.
   - Options: Do NOT include the letter prefix (e.g., \"A.\", \"B.\") in the option text. Just provide the answer text.
   - CorrectAnswer: Just the letter (e.g., \"A\", \"B\").
   - Output: Strictly valid JSON.
   - Language: Formal Indonesian (Ejaan Yang Disempurnakan).";
