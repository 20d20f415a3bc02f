use crate::models::domain::{SchoolLevel, SchoolProfile, Subject, User, UserRole};

const TUT_WURI_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9c/Logo_Tut_Wuri_Handayani.png/240px-Logo_Tut_Wuri_Handayani.png";

const ALL_LEVELS: &[SchoolLevel] = &[SchoolLevel::Smp, SchoolLevel::Sma, SchoolLevel::Smk];

fn school(
    id: &str,
    name: &str,
    level: SchoolLevel,
    headmaster_name: &str,
    headmaster_nip: &str,
    address: &str,
) -> SchoolProfile {
    SchoolProfile {
        id: id.to_string(),
        name: name.to_string(),
        level,
        logo_url: TUT_WURI_LOGO.to_string(),
        headmaster_name: headmaster_name.to_string(),
        headmaster_nip: headmaster_nip.to_string(),
        address: Some(address.to_string()),
        created_at: None,
    }
}

pub fn seed_schools() -> Vec<SchoolProfile> {
    vec![
        school(
            "sch_demo_1",
            "SMAS DHARMA BAKTI (SMA)",
            SchoolLevel::Sma,
            "Drs. H. Kepala SMA, M.Pd",
            "19750101 200012 1 001",
            "Jl. Pendidikan SMA No. 1",
        ),
        school(
            "sch_demo_2",
            "SMKN 1 TEKNOLOGI (SMK)",
            SchoolLevel::Smk,
            "Ir. Kepala SMK, M.T",
            "19800101 200512 1 002",
            "Jl. Vokasi No. 5",
        ),
        school(
            "sch_demo_3",
            "SMPN 5 HARAPAN (SMP)",
            SchoolLevel::Smp,
            "Dra. Kepala SMP, M.Pd",
            "19850101 201012 2 003",
            "Jl. Menengah No. 3",
        ),
    ]
}

pub fn seed_subjects() -> Vec<Subject> {
    use SchoolLevel::{Sma, Smk, Smp};

    vec![
        // Umum
        Subject::new("sub_1", "Bahasa Indonesia", ALL_LEVELS),
        Subject::new("sub_2", "Bahasa Inggris", ALL_LEVELS),
        Subject::new("sub_3", "Pendidikan Agama & Budi Pekerti", ALL_LEVELS),
        Subject::new("sub_4", "PPKn", ALL_LEVELS),
        // SMP
        Subject::new("sub_smp_1", "Ilmu Pengetahuan Alam (IPA)", &[Smp]),
        Subject::new("sub_smp_2", "Ilmu Pengetahuan Sosial (IPS)", &[Smp]),
        // SMA
        Subject::new("sub_sma_1", "Matematika Wajib", &[Sma, Smk]),
        Subject::new("sub_sma_2", "Fisika", &[Sma]),
        Subject::new("sub_sma_3", "Kimia", &[Sma]),
        Subject::new("sub_sma_4", "Biologi", &[Sma]),
        Subject::new("sub_sma_5", "Geografi", &[Sma]),
        Subject::new("sub_sma_6", "Sosiologi", &[Sma]),
        Subject::new("sub_sma_7", "Ekonomi", &[Sma]),
        Subject::new("sub_sma_8", "Sejarah", &[Sma, Smk]),
        // SMK
        Subject::new("sub_smk_1", "Dasar Program Keahlian (TKJ/RPL)", &[Smk]),
        Subject::new("sub_smk_2", "Produk Kreatif & Kewirausahaan", &[Smk]),
        Subject::new("sub_smk_3", "Akuntansi Dasar", &[Smk]),
        Subject::new("sub_smk_4", "Administrasi Umum", &[Smk]),
        Subject::new("sub_smk_5", "Informatika", &[Sma, Smk, Smp]),
    ]
}

/// Seed accounts carry no password hash; they can only sign in through
/// the demo credentials until an administrator sets a password.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("admin", "Administrator", UserRole::Admin),
        User::new("guru", "Guru Mapel", UserRole::User),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_schools_cover_every_level() {
        let schools = seed_schools();

        assert_eq!(schools.len(), 3);
        for level in SchoolLevel::ALL {
            assert!(schools.iter().any(|s| s.level == level));
        }
    }

    #[test]
    fn test_seed_subject_ids_are_unique() {
        let subjects = seed_subjects();
        let mut ids: Vec<&str> = subjects.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), subjects.len());
    }

    #[test]
    fn test_seed_users_have_no_password() {
        assert!(seed_users().iter().all(|u| u.password_hash.is_none()));
    }
}
