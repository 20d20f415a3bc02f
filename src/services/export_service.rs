use std::fmt::Write;

use crate::models::domain::{ExamDocument, MultipleChoiceQuestion};

const ISSUING_AUTHORITY: &str = "PEMERINTAH PROVINSI DAERAH KHUSUS IBUKOTA";
const SCHOOL_ADDRESS: &str = "Jl. Pendidikan No. 1, Kota Pelajar, Indonesia";
const SIGNING_CITY: &str = "Jakarta";
const DURATION: &str = "90 Menit";
const KEY_ROW_WIDTH: usize = 5;

const BASE_CSS: &str = "body { font-family: 'Times New Roman', serif; font-size: 12pt; }\n\
table.grid { width: 100%; border-collapse: collapse; }\n\
table.grid td, table.grid th { border: 1px solid black; padding: 4px; vertical-align: top; }\n\
table.grid th { background-color: #eee; }\n\
.question { margin-bottom: 10px; page-break-inside: avoid; }\n\
.options p { margin: 2px 0 2px 30px; }\n\
.center { text-align: center; }";

const PRINT_CSS: &str = "@page { size: A4; margin: 2cm 2cm 2cm 2.5cm; }\n\
@media print { .page-break { page-break-before: always; } }";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Word,
    Print,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "word" | "doc" => Some(ExportFormat::Word),
            "print" | "pdf" | "html" => Some(ExportFormat::Print),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Word => "application/msword",
            ExportFormat::Print => "text/html; charset=utf-8",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    pub include_answer_key: bool,
    /// First year of the academic year printed in the header.
    pub academic_year: i32,
}

#[derive(Debug)]
pub struct ExportedDocument {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Renders exam documents into self-contained HTML for Word or the
/// browser's print-to-PDF.
#[derive(Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        ExportService
    }

    pub fn export(
        &self,
        exam: &ExamDocument,
        format: ExportFormat,
        options: ExportOptions,
    ) -> ExportedDocument {
        let html = self.render_html(exam, format, options);
        let (body, extension) = match format {
            // Word needs the BOM to pick UTF-8 for HTML documents
            ExportFormat::Word => (format!("\u{feff}{}", html).into_bytes(), "doc"),
            ExportFormat::Print => (html.into_bytes(), "html"),
        };

        ExportedDocument {
            body,
            content_type: format.content_type(),
            filename: format!("soal_{}.{}", filename_safe(&exam.subject), extension),
        }
    }

    pub fn render_html(
        &self,
        exam: &ExamDocument,
        format: ExportFormat,
        options: ExportOptions,
    ) -> String {
        let mut out = String::new();

        match format {
            ExportFormat::Word => out.push_str(
                "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
                 xmlns:w='urn:schemas-microsoft-com:office:word' \
                 xmlns='http://www.w3.org/TR/REC-html40'>\n",
            ),
            ExportFormat::Print => out.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n"),
        }

        let _ = write!(
            out,
            "<head><meta charset=\"utf-8\"><title>{}</title>\n<style>\n{}\n",
            escape_html(&exam.title),
            BASE_CSS
        );
        if format == ExportFormat::Print {
            out.push_str(PRINT_CSS);
            out.push('\n');
        }
        out.push_str("</style>\n</head>\n<body>\n");

        render_header(&mut out, exam, options.academic_year);
        render_identity(&mut out, exam);
        out.push_str(
            "<div style=\"margin-bottom: 10px; border: 1px solid black; padding: 5px; font-size: 10pt;\">\
             <b>Petunjuk Umum:</b><br/>1. Berdoa sebelum mengerjakan.<br/>2. Periksa kelengkapan soal.</div>\n",
        );
        render_multiple_choice(&mut out, &exam.multiple_choice);
        render_essay(&mut out, exam);
        render_signatures(&mut out, exam);

        if options.include_answer_key {
            render_answer_key(&mut out, exam);
            render_grid(&mut out, exam);
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Escapes text for HTML and turns newlines into line breaks.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\r' => {}
            '\n' => escaped.push_str("<br/>"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn filename_safe(subject: &str) -> String {
    let cleaned: String = subject
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "ujian".to_string()
    } else {
        cleaned
    }
}

fn page_break(out: &mut String) {
    out.push_str("<br clear=\"all\" class=\"page-break\" style=\"page-break-before:always\" />\n");
}

fn render_header(out: &mut String, exam: &ExamDocument, academic_year: i32) {
    let logo = if exam.logo_url.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" width=\"80\" height=\"80\" style=\"object-fit:contain;\" />",
            escape_html(&exam.logo_url)
        )
    };

    let _ = write!(
        out,
        "<table style=\"width: 100%; border-bottom: 3px double black; margin-bottom: 20px;\">\n\
         <tr><td style=\"width: 15%; text-align: center;\">{}</td>\n\
         <td style=\"width: 85%; text-align: center;\">\
         <p style=\"margin:0; font-size: 14pt; font-weight: bold;\">{}</p>\
         <p style=\"margin:0; font-size: 16pt; font-weight: bold;\">{}</p>\
         <p style=\"margin:0; font-size: 10pt;\">{}</p></td></tr>\n</table>\n\
         <div class=\"center\" style=\"margin-bottom: 20px;\">\
         <p style=\"margin:0; font-weight: bold; text-decoration: underline;\">{}</p>\
         <p style=\"margin:0; font-size: 10pt;\">Tahun Pelajaran {}/{}</p></div>\n",
        logo,
        ISSUING_AUTHORITY,
        escape_html(&exam.school_name.to_uppercase()),
        SCHOOL_ADDRESS,
        escape_html(&exam.title.to_uppercase()),
        academic_year,
        academic_year + 1
    );
}

fn render_identity(out: &mut String, exam: &ExamDocument) {
    let _ = write!(
        out,
        "<table style=\"width: 100%; font-size: 11pt; margin-bottom: 15px;\">\n\
         <tr><td style=\"width: 15%\">Mata Pelajaran</td><td style=\"width: 2%\">:</td>\
         <td style=\"width: 40%\"><b>{}</b></td>\
         <td style=\"width: 15%\">Hari/Tanggal</td><td style=\"width: 2%\">:</td>\
         <td style=\"width: 26%\">....................</td></tr>\n\
         <tr><td>Kelas/Semester</td><td>:</td><td>{} / {}</td>\
         <td>Waktu</td><td>:</td><td>{}</td></tr>\n</table>\n",
        escape_html(&exam.subject),
        escape_html(&exam.grade),
        escape_html(&exam.semester),
        DURATION
    );
}

fn render_multiple_choice(out: &mut String, questions: &[MultipleChoiceQuestion]) {
    out.push_str("<h3>A. PILIHAN GANDA</h3>\n");
    for (i, q) in questions.iter().enumerate() {
        let _ = write!(
            out,
            "<div class=\"question\"><table style=\"width: 100%;\"><tr>\
             <td style=\"width: 30px; vertical-align: top;\">{}.</td><td>{}</td></tr></table>\
             <div class=\"options\">",
            i + 1,
            escape_html(&q.question)
        );
        for (letter, option) in MultipleChoiceQuestion::OPTION_LETTERS.iter().zip(&q.options) {
            let _ = write!(out, "<p>{}. {}</p>", letter, escape_html(option));
        }
        out.push_str("</div></div>\n");
    }
}

fn render_essay(out: &mut String, exam: &ExamDocument) {
    out.push_str("<h3>B. URAIAN</h3>\n");
    for (i, q) in exam.essay.iter().enumerate() {
        let _ = write!(
            out,
            "<div class=\"question\"><table style=\"width: 100%;\"><tr>\
             <td style=\"width: 30px; vertical-align: top;\">{}.</td><td>{}</td></tr></table></div>\n",
            i + 1,
            escape_html(&q.question)
        );
    }
}

fn render_signatures(out: &mut String, exam: &ExamDocument) {
    let _ = write!(
        out,
        "<table class=\"center\" style=\"width: 100%; margin-top: 50px; page-break-inside: avoid;\"><tr>\n\
         <td style=\"width: 40%\">Mengetahui,<br/>Kepala Sekolah<br/><br/><br/><br/>\
         <b><u>{}</u></b><br/>NIP. {}</td>\n\
         <td style=\"width: 20%\"></td>\n\
         <td style=\"width: 40%\">{}, {}<br/>Guru Mata Pelajaran<br/><br/><br/><br/>\
         <b><u>{}</u></b><br/>NIP. {}</td>\n</tr></table>\n",
        escape_html(&exam.headmaster_name),
        escape_html(&exam.headmaster_nip),
        SIGNING_CITY,
        escape_html(&exam.date),
        escape_html(&exam.teacher_name),
        escape_html(&exam.teacher_nip)
    );
}

fn render_answer_key(out: &mut String, exam: &ExamDocument) {
    page_break(out);
    out.push_str("<h2 class=\"center\">KUNCI JAWABAN</h2>\n<h3>A. PILIHAN GANDA</h3>\n");
    out.push_str("<table class=\"grid center\">\n");
    for (row, chunk) in exam.multiple_choice.chunks(KEY_ROW_WIDTH).enumerate() {
        out.push_str("<tr>");
        for (col, q) in chunk.iter().enumerate() {
            let _ = write!(
                out,
                "<td><b>{}. {}</b></td>",
                row * KEY_ROW_WIDTH + col + 1,
                escape_html(&q.correct_answer)
            );
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");

    out.push_str(
        "<h3>B. URAIAN</h3>\n<table class=\"grid\">\n\
         <tr><th style=\"width: 50px;\">No</th><th>Jawaban &amp; Pedoman</th></tr>\n",
    );
    for (i, q) in exam.essay.iter().enumerate() {
        let _ = write!(
            out,
            "<tr><td class=\"center\">{}</td><td>{}</td></tr>\n",
            i + 1,
            escape_html(&q.answer_key)
        );
    }
    out.push_str("</table>\n");
}

fn render_grid(out: &mut String, exam: &ExamDocument) {
    page_break(out);
    out.push_str(
        "<h2 class=\"center\">KISI-KISI PENULISAN SOAL</h2>\n\
         <table class=\"grid\" style=\"font-size: 10pt;\">\n\
         <tr><th>No</th><th>CP</th><th>Materi</th><th>Indikator Soal</th><th>Bentuk</th><th>No. Soal</th></tr>\n",
    );

    let rows = exam
        .multiple_choice
        .iter()
        .map(|q| (&q.metadata, "PG"))
        .chain(exam.essay.iter().map(|q| (&q.metadata, "Uraian")));

    for (i, (metadata, form)) in rows.enumerate() {
        let _ = write!(
            out,
            "<tr><td class=\"center\">{n}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"center\">{}</td><td class=\"center\">{n}</td></tr>\n",
            or_dash(&metadata.cp),
            or_dash(&metadata.material),
            or_dash(&metadata.indicator),
            form,
            n = i + 1
        );
    }
    out.push_str("</table>\n");
}

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        escape_html(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{
        exam::fixtures, GeneratorConfig, GradeLevel, SchoolLevel,
    };
    use chrono::NaiveDate;

    fn exam() -> ExamDocument {
        let config = GeneratorConfig::test_config("Ekonomi", GradeLevel::X, SchoolLevel::Sma);
        ExamDocument::from_generation(
            fixtures::payload(),
            &config,
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        )
    }

    fn options(include_answer_key: bool) -> ExportOptions {
        ExportOptions {
            include_answer_key,
            academic_year: 2024,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("a < b & \"c\"\nbaris"),
            "a &lt; b &amp; &quot;c&quot;<br/>baris"
        );
        assert_eq!(escape_html("x\r\ny"), "x<br/>y");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("Word"), Some(ExportFormat::Word));
        assert_eq!(ExportFormat::parse("print"), Some(ExportFormat::Print));
        assert_eq!(ExportFormat::parse("pdf"), Some(ExportFormat::Print));
        assert_eq!(ExportFormat::parse("xlsx"), None);
    }

    #[test]
    fn test_exam_body_sections() {
        let html = ExportService::new().render_html(&exam(), ExportFormat::Print, options(false));

        assert!(html.contains("PEMERINTAH PROVINSI DAERAH KHUSUS IBUKOTA"));
        assert!(html.contains("SMAS DHARMA BAKTI"));
        assert!(html.contains("Tahun Pelajaran 2024/2025"));
        assert!(html.contains("90 Menit"));
        assert!(html.contains("Petunjuk Umum:"));
        assert!(html.contains("A. PILIHAN GANDA"));
        assert!(html.contains("B. URAIAN"));
        assert!(html.contains("<p>E. "));
        assert!(html.contains("Jakarta, 20 Mei 2024"));
        assert!(html.contains("NIP. 19700101 199501 1 001"));
        assert!(html.contains("size: A4"));
        assert!(!html.contains("KUNCI JAWABAN"));
        assert!(!html.contains("KISI-KISI"));
    }

    #[test]
    fn test_answer_key_and_grid() {
        let html = ExportService::new().render_html(&exam(), ExportFormat::Print, options(true));

        assert!(html.contains("KUNCI JAWABAN"));
        assert!(html.contains("<td><b>1. A</b></td>"));
        assert!(html.contains("<td><b>2. C</b></td>"));
        assert!(html.contains("KISI-KISI PENULISAN SOAL"));
        assert!(html.contains("<td class=\"center\">PG</td>"));
        assert!(html.contains("<td class=\"center\">Uraian</td>"));
        assert!(html.matches("page-break-before:always").count() >= 2);
    }

    #[test]
    fn test_answer_key_rows_of_five() {
        let mut exam = exam();
        exam.multiple_choice = (1..=12).map(|id| fixtures::mcq(id, "B")).collect();

        let html = ExportService::new().render_html(&exam, ExportFormat::Print, options(true));
        let key = &html[html.find("KUNCI JAWABAN").unwrap()..html.find("B. URAIAN</h3>\n<table").unwrap()];

        assert_eq!(key.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_word_export() {
        let doc = ExportService::new().export(&exam(), ExportFormat::Word, options(true));
        let text = String::from_utf8(doc.body).unwrap();

        assert!(text.starts_with('\u{feff}'));
        assert!(text.contains("urn:schemas-microsoft-com:office:word"));
        assert_eq!(doc.content_type, "application/msword");
        assert_eq!(doc.filename, "soal_Ekonomi.doc");
    }

    #[test]
    fn test_question_text_is_escaped() {
        let mut exam = exam();
        exam.multiple_choice[0].question = "Jika P <b>naik</b>\nmaka?".to_string();

        let html = ExportService::new().render_html(&exam, ExportFormat::Print, options(false));

        assert!(html.contains("Jika P &lt;b&gt;naik&lt;/b&gt;<br/>maka?"));
    }

    #[test]
    fn test_filename_is_sanitized() {
        let mut exam = exam();
        exam.subject = "Produk Kreatif & Kewirausahaan".to_string();

        let doc = ExportService::new().export(&exam, ExportFormat::Print, options(false));
        assert_eq!(doc.filename, "soal_Produk_Kreatif___Kewirausahaan.html");
    }
}
