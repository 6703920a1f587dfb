//! Built-in sample collection.
//!
//! Used when no course file is supplied, and as the fixture most tests run
//! against.

use crate::types::CourseRecord;

fn course(fields: [&str; 13]) -> CourseRecord {
    let [
        university_name,
        location,
        image_url,
        course_name,
        course_level,
        field_of_study,
        duration_years,
        tuition_fee_nzd,
        entry_requirements,
        exams_required,
        scholarship_available,
        scholarship_details,
        apply_link,
    ] = fields.map(str::to_string);

    CourseRecord {
        university_name,
        location,
        image_url,
        course_name,
        course_level,
        field_of_study,
        duration_years,
        tuition_fee_nzd,
        entry_requirements,
        exams_required,
        scholarship_available,
        scholarship_details,
        apply_link,
    }
}

/// The five New Zealand sample courses, in their canonical order.
pub fn sample_courses() -> Vec<CourseRecord> {
    vec![
        course([
            "University of Auckland",
            "Auckland",
            "https://images.unsplash.com/photo-1521618755572-156ae0cdd74d",
            "Master of Data Science",
            "Postgraduate",
            "IT",
            "2",
            "35000",
            "Bachelor's in relevant field",
            "IELTS",
            "Yes",
            "University of Auckland International Student Scholarship - up to $10,000",
            "https://www.auckland.ac.nz/en/study.html",
        ]),
        course([
            "University of Otago",
            "Dunedin",
            "https://images.unsplash.com/photo-1564981797816-1043664bf78d",
            "Bachelor of Commerce",
            "Undergraduate",
            "Business",
            "3",
            "27000",
            "High school diploma with good grades",
            "IELTS",
            "No",
            "",
            "https://www.otago.ac.nz/study",
        ]),
        course([
            "AUT University",
            "Auckland",
            "https://images.unsplash.com/photo-1498243691581-b145c3f54a5a",
            "Master of Public Health",
            "Postgraduate",
            "Health",
            "2",
            "32000",
            "Relevant bachelor's degree + experience",
            "PTE",
            "Yes",
            "AUT International Excellence Scholarship",
            "https://www.aut.ac.nz/courses",
        ]),
        course([
            "University of Canterbury",
            "Christchurch",
            "https://images.unsplash.com/photo-1592280771190-3e2e4d977758",
            "Bachelor of Engineering",
            "Undergraduate",
            "Engineering",
            "4",
            "30000",
            "High school diploma with math/science",
            "IELTS",
            "Yes",
            "UC International First Year Scholarship - $10,000-20,000",
            "https://www.canterbury.ac.nz/study",
        ]),
        course([
            "Victoria University of Wellington",
            "Wellington",
            "https://images.unsplash.com/photo-1574958269340-fa927503f3dd",
            "Master of International Relations",
            "Postgraduate",
            "Social Sciences",
            "2",
            "33000",
            "Bachelor's degree",
            "TOEFL",
            "Yes",
            "VUW International Excellence Scholarship",
            "https://www.wgtn.ac.nz/study",
        ]),
    ]
}
