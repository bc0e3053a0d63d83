//! Typed ids of the shopping context

use kernel::id::Id;

pub struct GroupMarker;
pub type GroupId = Id<GroupMarker>;

pub struct MemberMarker;
pub type MemberId = Id<MemberMarker>;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

pub struct CategoryMarker;
pub type CategoryId = Id<CategoryMarker>;

pub struct ProductNameMarker;
pub type ProductNameId = Id<ProductNameMarker>;
