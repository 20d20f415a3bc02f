use std::collections::HashMap;

use crate::models::domain::{GradeLevel, Semester};

const FASE_D_7_GANJIL: &str = "KURIKULUM MERDEKA (FASE D - KELAS 7)

FOKUS KOMPETENSI:
1. Pemahaman Diri dan Lingkungan:
   - Interaksi antarwilayah, sosialisasi, dan pembentukan karakter.
   - Peta dan pemanfaatannya dalam kehidupan.
2. Literasi & Numerasi Dasar:
   - Penggunaan data sederhana dalam analisis sosial/sains.
   - Teks deskripsi dan narasi (Bahasa).";

const FASE_D_7_GENAP: &str = "KURIKULUM MERDEKA (FASE D - KELAS 7)

FOKUS KOMPETENSI:
1. Keberagaman dan Persatuan:
   - Kebinekaan Indonesia, toleransi, dan gotong royong.
   - Aktivitas ekonomi manusia prasejarah hingga kini.
2. Lingkungan Hidup:
   - Pencemaran lingkungan dan dampaknya (IPA).
   - Adaptasi makhluk hidup.";

const FASE_D_8_GANJIL: &str = "KURIKULUM MERDEKA (FASE D - KELAS 8)

FOKUS KOMPETENSI:
1. Sistem Organisasi Kehidupan (IPA):
   - Sel, jaringan, organ, sistem organ.
   - Sistem pencernaan dan zat aditif.
2. Mobilitas Sosial (IPS):
   - Pluralitas masyarakat Indonesia.
   - Konflik dan integrasi.";

const FASE_D_8_GENAP: &str = "KURIKULUM MERDEKA (FASE D - KELAS 8)

FOKUS KOMPETENSI:
1. Tekanan Zat dan Getaran (IPA):
   - Tekanan zat cair, padat, gas.
   - Getaran, gelombang, dan bunyi.
2. Perekonomian dan Kemerdekaan (IPS):
   - Perdagangan antardaerah/internasional.
   - Sejarah pergerakan kebangsaan.";

const FASE_D_9_GANJIL: &str = "KURIKULUM MERDEKA (FASE D - KELAS 9)

FOKUS KOMPETENSI:
1. Sistem Reproduksi & Pewarisan Sifat (IPA):
   - Pembelahan sel, reproduksi manusia/tumbuhan.
   - Genetika dasar.
2. Perubahan Sosial Budaya (IPS):
   - Globalisasi dan dampaknya.
   - Modernisasi di Indonesia.";

const FASE_D_9_GENAP: &str = "KURIKULUM MERDEKA (FASE D - KELAS 9)

FOKUS KOMPETENSI:
1. Teknologi Ramah Lingkungan (IPA):
   - Bioteknologi pangan dan lingkungan.
   - Tanah dan keberlangsungan kehidupan.
2. Indonesia Pasca Kemerdekaan (IPS):
   - Masa Orde Baru hingga Reformasi.
   - Kerja sama ekonomi internasional.";

const FASE_E_GANJIL: &str = "KURIKULUM MERDEKA (FASE E)

LINGKUP MATERI:
1. Konsep Dasar & Penelitian:
   - Definisi, objek studi, prinsip, pendekatan.
   - Langkah-langkah penelitian ilmiah sederhana.
2. Fenomena Geosfer (Geografi):
   - Peta, Pengindraan Jauh, SIG.
3. Struktur Atom & Ikatan Kimia (Kimia).
4. Virus & Keanekaragaman Hayati (Biologi).";

const FASE_E_GENAP: &str = "KURIKULUM MERDEKA (FASE E)

LINGKUP MATERI:
1. Dinamika Litosfer & Atmosfer:
   - Tektonisme, vulkanisme, seisme, cuaca, iklim.
2. Energi Terbarukan (Fisika):
   - Usaha, energi, dan sumber energi alternatif.
3. Ekosistem & Perubahan Lingkungan (Biologi).
4. Stoikiometri Dasar (Kimia).";

const FASE_F_11_GANJIL: &str = "KURIKULUM MERDEKA (FASE F)

LINGKUP MATERI:
1. Kompleksitas Keruangan (Geografi):
   - Posisi strategis Indonesia, Flora Fauna.
2. Sistem Tubuh Manusia (Biologi):
   - Sel, transpor membran, sistem gerak, sirkulasi.
3. Dinamika Gerak & Fluida (Fisika).
4. Hidrokarbon & Termokimia (Kimia).";

const FASE_F_11_GENAP: &str = "KURIKULUM MERDEKA (FASE F)

LINGKUP MATERI:
1. Dinamika Penduduk & Mitigasi (Geografi).
2. Sistem Pertahanan Tubuh & Hormon (Biologi).
3. Gelombang Cahaya & Bunyi (Fisika).
4. Laju Reaksi & Kesetimbangan (Kimia).";

const FASE_F_12_GANJIL: &str = "KURIKULUM MERDEKA (FASE F - Lanjutan)

LINGKUP MATERI:
1. Pengembangan Wilayah (Geografi):
   - Tata ruang, interaksi desa-kota.
2. Pertumbuhan & Perkembangan, Genetika (Biologi).
3. Listrik Statis & Dinamis, Magnet (Fisika).
4. Sifat Koligatif Larutan & Redoks (Kimia).";

const FASE_F_12_GENAP: &str = "KURIKULUM MERDEKA (FASE F - Lanjutan)

LINGKUP MATERI:
1. Kerjasama Negara Maju-Berkembang (Geografi).
2. Evolusi & Bioteknologi (Biologi).
3. Fisika Modern & Radioaktivitas (Fisika).
4. Kimia Unsur & Makromolekul (Kimia).";

const STANDARD_ENTRIES: [(GradeLevel, Semester, &str); 12] = [
    (GradeLevel::Vii, Semester::Ganjil, FASE_D_7_GANJIL),
    (GradeLevel::Vii, Semester::Genap, FASE_D_7_GENAP),
    (GradeLevel::Viii, Semester::Ganjil, FASE_D_8_GANJIL),
    (GradeLevel::Viii, Semester::Genap, FASE_D_8_GENAP),
    (GradeLevel::Ix, Semester::Ganjil, FASE_D_9_GANJIL),
    (GradeLevel::Ix, Semester::Genap, FASE_D_9_GENAP),
    (GradeLevel::X, Semester::Ganjil, FASE_E_GANJIL),
    (GradeLevel::X, Semester::Genap, FASE_E_GENAP),
    (GradeLevel::Xi, Semester::Ganjil, FASE_F_11_GANJIL),
    (GradeLevel::Xi, Semester::Genap, FASE_F_11_GENAP),
    (GradeLevel::Xii, Semester::Ganjil, FASE_F_12_GANJIL),
    (GradeLevel::Xii, Semester::Genap, FASE_F_12_GENAP),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurriculumEntry {
    pub grade: GradeLevel,
    pub semester: Semester,
    pub context: String,
}

impl CurriculumEntry {
    pub fn new(grade: GradeLevel, semester: Semester, context: &str) -> Self {
        CurriculumEntry {
            grade,
            semester,
            context: context.to_string(),
        }
    }
}

/// Read-only mapping from (grade, semester) to curriculum reference text.
#[derive(Clone, Debug, Default)]
pub struct CurriculumTable {
    entries: HashMap<(GradeLevel, Semester), String>,
}

impl CurriculumTable {
    pub fn new(entries: impl IntoIterator<Item = CurriculumEntry>) -> Self {
        CurriculumTable {
            entries: entries
                .into_iter()
                .map(|e| ((e.grade, e.semester), e.context))
                .collect(),
        }
    }

    /// Kurikulum Merdeka reference text for every grade and semester.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_ENTRIES
                .iter()
                .map(|(grade, semester, text)| CurriculumEntry::new(*grade, *semester, text)),
        )
    }

    pub fn lookup(&self, grade: GradeLevel, semester: Semester) -> Option<&str> {
        self.entries.get(&(grade, semester)).map(String::as_str)
    }

    /// Like [`lookup`](Self::lookup) but a missing pair is an empty context.
    pub fn context_for(&self, grade: GradeLevel, semester: Semester) -> &str {
        self.lookup(grade, semester).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
