use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::caps::Constructible;
use crate::{Number, Primitive};

impl<T: Primitive + Serialize, I, C, P> Serialize for Number<T, I, C, P> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Primitive + Deserialize<'de>, I, C: Constructible, P> Deserialize<'de> for Number<T, I, C, P> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::from_raw)
    }
}
