//! Fixed catalogs the synthetic directory is combined from: institutes with
//! their home states, branch and course lists, and the state roster used
//! for per-state cutoff offsets.

/// (institute name, home state)
pub const IITS: &[(&str, &str)] = &[
    ("IIT Bombay", "Maharashtra"),
    ("IIT Delhi", "Delhi"),
    ("IIT Madras", "Tamil Nadu"),
    ("IIT Kanpur", "Uttar Pradesh"),
    ("IIT Kharagpur", "West Bengal"),
    ("IIT Roorkee", "Uttarakhand"),
    ("IIT Guwahati", "Assam"),
    ("IIT Hyderabad", "Telangana"),
    ("IIT Indore", "Madhya Pradesh"),
    ("IIT (BHU) Varanasi", "Uttar Pradesh"),
    ("IIT Ropar", "Punjab"),
    ("IIT Gandhinagar", "Gujarat"),
    ("IIT Bhubaneswar", "Odisha"),
    ("IIT Mandi", "Himachal Pradesh"),
    ("IIT Jodhpur", "Rajasthan"),
    ("IIT Patna", "Bihar"),
];

pub const NITS: &[(&str, &str)] = &[
    ("NIT Trichy", "Tamil Nadu"),
    ("NIT Surathkal", "Karnataka"),
    ("NIT Warangal", "Telangana"),
    ("NIT Rourkela", "Odisha"),
    ("NIT Calicut", "Kerala"),
    ("MNIT Jaipur", "Rajasthan"),
    ("NIT Kurukshetra", "Haryana"),
    ("VNIT Nagpur", "Maharashtra"),
    ("MNNIT Allahabad", "Uttar Pradesh"),
    ("NIT Durgapur", "West Bengal"),
    ("NIT Silchar", "Assam"),
    ("NIT Jalandhar", "Punjab"),
    ("NIT Patna", "Bihar"),
    ("NIT Raipur", "Chhattisgarh"),
    ("NIT Srinagar", "Jammu and Kashmir"),
    ("NIT Agartala", "Tripura"),
];

/// Deemed universities and private engineering institutes. The third field
/// distinguishes the `Private` and `University` directory types.
pub const PRIVATE_ENGINEERING: &[(&str, &str, bool)] = &[
    ("BITS Pilani", "Rajasthan", true),
    ("VIT Vellore", "Tamil Nadu", true),
    ("SRM Institute of Science and Technology", "Tamil Nadu", true),
    ("Manipal Institute of Technology", "Karnataka", false),
    ("Thapar Institute of Engineering and Technology", "Punjab", true),
    ("Amrita Vishwa Vidyapeetham", "Kerala", true),
    ("PES University", "Karnataka", true),
    ("RV College of Engineering", "Karnataka", false),
    ("Shiv Nadar University", "Uttar Pradesh", true),
    ("LNMIIT Jaipur", "Rajasthan", false),
];

pub const AIIMS_CAMPUSES: &[(&str, &str)] = &[
    ("AIIMS New Delhi", "Delhi"),
    ("AIIMS Jodhpur", "Rajasthan"),
    ("AIIMS Bhopal", "Madhya Pradesh"),
    ("AIIMS Bhubaneswar", "Odisha"),
    ("AIIMS Rishikesh", "Uttarakhand"),
    ("AIIMS Patna", "Bihar"),
    ("AIIMS Raipur", "Chhattisgarh"),
    ("AIIMS Nagpur", "Maharashtra"),
];

pub const GOVERNMENT_MEDICAL: &[(&str, &str)] = &[
    ("Maulana Azad Medical College", "Delhi"),
    ("King George's Medical University", "Uttar Pradesh"),
    ("Madras Medical College", "Tamil Nadu"),
    ("Grant Medical College", "Maharashtra"),
    ("Bangalore Medical College", "Karnataka"),
    ("Institute of Medical Sciences BHU", "Uttar Pradesh"),
    ("Government Medical College Thiruvananthapuram", "Kerala"),
    ("Osmania Medical College", "Telangana"),
];

pub const PRIVATE_MEDICAL: &[(&str, &str)] = &[
    ("Kasturba Medical College Manipal", "Karnataka"),
    ("Christian Medical College Vellore", "Tamil Nadu"),
    ("St. John's Medical College", "Karnataka"),
    ("JSS Medical College", "Karnataka"),
    ("Amrita School of Medicine", "Kerala"),
    ("SRM Medical College", "Tamil Nadu"),
];

pub const ENGINEERING_BRANCHES: &[&str] = &[
    "Computer Science and Engineering",
    "Electronics and Communication Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Aerospace Engineering",
    "Metallurgical Engineering",
];

pub const MEDICAL_COURSES: &[&str] = &["MBBS", "BDS", "BAMS", "B.Sc Nursing"];

/// The 29 states plus Delhi. Position in this list is the per-state cutoff
/// offset index.
pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
];

/// Index of a state in [`STATES`], used as the per-state cutoff offset.
/// Unknown states fall back to 0.
pub fn state_index(state: &str) -> usize {
    STATES.iter().position(|s| *s == state).unwrap_or(0)
}
