use std::collections::HashMap;

lazy_static::lazy_static! {
    pub static ref ENGLISH_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Stat cards
        m.insert("card_male", "MALE");
        m.insert("card_female", "FEMALE");
        m.insert("card_unknown", "OTHER");
        m.insert("card_total", "TOTAL");

        // Section headers
        m.insert("section_counts", "COUNTS");
        m.insert("section_chart", "DISTRIBUTION");

        // Report header
        m.insert("report_header", "GENDER TALLY");
        m.insert("report_input", "Input");
        m.insert("report_source_local", "local matching");
        m.insert("report_source_smart", "smart analysis");

        // Messages
        m.insert("message_no_data", "No entries to chart yet");
        m.insert("message_analysis_error", "SMART ANALYSIS ERROR");
        m.insert("message_analysis_stale", "Smart analysis result discarded (input changed)");

        // Descriptions
        m.insert("desc_analysis_failure", "The local counts above remain valid.");

        m
    };

    pub static ref VIETNAMESE_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Stat cards
        m.insert("card_male", "Nam");
        m.insert("card_female", "Nữ");
        m.insert("card_unknown", "Khác");
        m.insert("card_total", "Tổng Cộng");

        // Section headers
        m.insert("section_counts", "Số lượng");
        m.insert("section_chart", "Biểu đồ phân bố");

        // Report header
        m.insert("report_header", "Thống Kê Nam & Nữ");
        m.insert("report_input", "Dữ liệu đầu vào");
        m.insert("report_source_local", "đối chiếu cục bộ");
        m.insert("report_source_smart", "phân tích thông minh");

        // Messages
        m.insert("message_no_data", "Chưa có dữ liệu");
        m.insert("message_analysis_error", "LỖI PHÂN TÍCH THÔNG MINH");
        m.insert("message_analysis_stale", "Đã bỏ qua kết quả phân tích cũ (dữ liệu đã thay đổi)");

        // Descriptions
        m.insert("desc_analysis_failure", "Kết quả đếm cục bộ ở trên vẫn hợp lệ.");

        m
    };
}
