// ==========================================
// 灌装线质量检查点系统 - 产品目录
// ==========================================
// 职责: 产品名称 → 目标灌装量的只读映射
// 启动时从部署配置载入一次,运行期不增删改
// ==========================================

use serde::{Deserialize, Serialize};

/// 产品定义
///
/// 目标灌装量单位为盎司,目录校验保证其为正数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub target_fill_oz: f64,
}

/// 产品目录
///
/// 保持载入顺序,供表单下拉框按固定顺序展示
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// 从产品列表构建目录
    ///
    /// 唯一性与取值范围由配置层 validate() 保证
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 按名称查找产品
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// 目录是否包含指定产品
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 产品数量
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 按载入顺序遍历产品
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// 产品名称列表（载入顺序）
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }
}
