//! Replies to contact-form messages.

use super::{GenerationContext, Row, TableData, Value};
use crate::fake::FakeData;
use crate::schema::Table;

/// Contact ids are drawn from 1..=CONTACT_ID_MAX; the contacts table itself is not generated
const CONTACT_ID_MAX: i64 = 100;

const CANNED_REPLIES: &[&str] = &[
    "Cảm ơn bạn đã liên hệ! Chúng tôi đã nhận được yêu cầu của bạn và sẽ phản hồi sớm nhất.",
    "Xin lỗi vì sự chậm trễ. Vấn đề của bạn đang được xử lý bởi đội ngũ hỗ trợ kỹ thuật của chúng tôi.",
    "Chúng tôi đã cung cấp giải pháp cho vấn đề của bạn. Vui lòng kiểm tra email của bạn để biết chi tiết.",
    "Để hiểu rõ hơn về vấn đề, bạn có thể cung cấp thêm thông tin không?",
    "Chúng tôi đang điều tra vấn đề này và sẽ cập nhật cho bạn ngay khi có thông tin mới.",
];

pub(super) fn generate(ctx: &mut GenerationContext, count: usize) -> TableData {
    if !ctx.require(Table::ContactReplies) {
        return TableData::empty(Table::ContactReplies);
    }

    let timestamp = ctx.timestamp();
    let mut rows: Vec<Row> = Vec::with_capacity(count);

    for i in 1..=count {
        let mut fake = FakeData::new(&mut ctx.rng);
        let contact_id = fake.int_range(1, CONTACT_ID_MAX);
        let user_id = fake.pick_id(ctx.ids.get_ids(Table::Users));
        let message = *fake.pick(CANNED_REPLIES);

        rows.push(vec![
            Value::Int(i as i64),
            Value::Int(contact_id),
            Value::Int(user_id),
            Value::from(message),
            Value::Text(timestamp.clone()),
            Value::Text(timestamp.clone()),
            Value::Null,
        ]);
        ctx.tick(i as u64);
    }

    TableData::new(
        Table::ContactReplies,
        Table::ContactReplies.columns(false),
        rows,
    )
}
